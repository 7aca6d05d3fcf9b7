//! Static evaluation: material plus square-value bonuses.
//!
//! Evaluation is recomputed from the position on every call. There are
//! no incremental accumulators, so the score can never drift from the
//! board across apply/undo pairs.

use shakmaty::{Chess, Color, Position, Role};

use super::psqt;

/// Terminal score for a forced mate, offset by ply so shorter mates
/// score higher than longer ones.
pub const MATE_SCORE: i32 = 1_000_000;

/// Default score for stalemate and dead positions. Draw-neutral; a
/// per-session contempt value can override it via `SearchLimits`.
pub const DRAW_SCORE: i32 = 0;

pub const PAWN_VALUE: i32 = 100;
pub const KNIGHT_VALUE: i32 = 320;
pub const BISHOP_VALUE: i32 = 330;
pub const ROOK_VALUE: i32 = 500;
pub const QUEEN_VALUE: i32 = 900;
pub const KING_VALUE: i32 = 20_000;

pub fn piece_value(role: Role) -> i32 {
    match role {
        Role::Pawn => PAWN_VALUE,
        Role::Knight => KNIGHT_VALUE,
        Role::Bishop => BISHOP_VALUE,
        Role::Rook => ROOK_VALUE,
        Role::Queen => QUEEN_VALUE,
        Role::King => KING_VALUE,
    }
}

const ROLES: [Role; 6] = [
    Role::Pawn,
    Role::Knight,
    Role::Bishop,
    Role::Rook,
    Role::Queen,
    Role::King,
];

/// Score the position from `perspective`'s point of view, in centipawns.
///
/// Material and positional bonuses are summed in the fixed
/// white-positive convention and negated for black, so
/// `evaluate(p, White) == -evaluate(p, Black)` for any position.
pub fn evaluate(pos: &Chess, perspective: Color) -> i32 {
    let board = pos.board();
    let mut score = 0;

    for color in [Color::White, Color::Black] {
        let sign = match color {
            Color::White => 1,
            Color::Black => -1,
        };
        let side = board.by_color(color);
        for role in ROLES {
            for sq in side & board.by_role(role) {
                score += sign * piece_value(role) + psqt::bonus(color, role, sq);
            }
        }
    }

    match perspective {
        Color::White => score,
        Color::Black => -score,
    }
}

/// Mate score against the side to move, `ply` half-moves into the
/// search. Positive: the perspective side delivers the mate.
pub fn mate_in(ply: i32) -> i32 {
    MATE_SCORE - ply
}

/// Widest ply offset a mate score can carry.
const MAX_MATE_PLY: i32 = 128;

/// True when `score` is inside the forced-mate band.
pub fn is_mate_score(score: i32) -> bool {
    score.abs() >= MATE_SCORE - MAX_MATE_PLY
}
