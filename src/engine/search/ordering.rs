//! Move ordering: priority buckets with an MVV-LVA capture tie-break.
//!
//! Every legal move is speculatively applied, classified by what it
//! does to the opponent, and undone again before the next candidate is
//! probed. Buckets concatenate in priority order; within a bucket the
//! generation order is preserved (captures additionally sort by
//! most-valuable-victim first).

use shakmaty::Move;

use crate::engine::eval::piece_value;
use crate::rules::Board;

/// Priority buckets, cheapest-win-first. Declaration order is sort
/// order.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum MoveClass {
    Mate,
    Promotion,
    Check,
    Capture,
    Quiet,
}

/// Classify one candidate. The probe's undo is unconditional, so the
/// position is identical before and after; a move that cannot even be
/// probed is logged and filed as quiet rather than dropped.
pub fn classify(board: &mut Board, mv: &Move) -> MoveClass {
    let probed = board.probe_move(mv, |b| {
        if b.is_checkmate() {
            MoveClass::Mate
        } else if b.is_check() {
            MoveClass::Check
        } else {
            MoveClass::Quiet
        }
    });

    let probed = match probed {
        Ok(class) => class,
        Err(err) => {
            log::warn!("move ordering probe failed: {err}");
            return MoveClass::Quiet;
        }
    };

    match probed {
        MoveClass::Mate => MoveClass::Mate,
        _ if mv.is_promotion() => MoveClass::Promotion,
        MoveClass::Check => MoveClass::Check,
        _ if mv.is_capture() => MoveClass::Capture,
        _ => MoveClass::Quiet,
    }
}

/// Most valuable victim, least valuable attacker. The victim role comes
/// off the move record, so en passant counts the captured pawn.
fn mvv_lva(mv: &Move) -> i32 {
    let victim = mv.capture().map(piece_value).unwrap_or(0);
    let attacker = piece_value(mv.role());
    victim * 10 - attacker
}

/// Order the current legal moves for alpha-beta. The output is a
/// permutation of `board.legal_moves()`; the position is unchanged.
pub fn order_moves(board: &mut Board) -> Vec<Move> {
    let legals = board.legal_moves();
    let mut scored: Vec<(Move, MoveClass, i32)> = legals
        .iter()
        .map(|mv| {
            let class = classify(board, mv);
            let tiebreak = match class {
                MoveClass::Capture => -mvv_lva(mv),
                _ => 0,
            };
            (mv.clone(), class, tiebreak)
        })
        .collect();

    // Stable sort: ties keep the rules engine's generation order.
    scored.sort_by_key(|&(_, class, tiebreak)| (class, tiebreak));
    scored.into_iter().map(|(mv, _, _)| mv).collect()
}
