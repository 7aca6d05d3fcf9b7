//! Alpha-beta minimax over the move tree.

use crate::engine::eval::{self, evaluate};
use crate::engine::tt::{TTFlag, TranspositionTable};
use crate::rules::Board;

use super::ordering;
use super::searcher::Searcher;
use super::types::INFINITY;

/// Pull a static score toward zero by the ply it was found at, so the
/// same material found sooner outranks it found later. Mirrors the
/// shorter-mate preference of the mate offset.
fn ply_adjusted(score: i32, ply: i32) -> i32 {
    match score.signum() {
        1 => (score - ply).max(0),
        -1 => (score + ply).min(0),
        _ => 0,
    }
}

/// Mate scores count plies from the root, but the table is keyed by
/// position alone, so they are rebased to the storing node before a
/// store and back to the probing node after a hit. Scores outside the
/// mate band pass through unchanged.
fn score_to_tt(score: i32, ply: i32) -> i32 {
    if eval::is_mate_score(score) {
        if score > 0 {
            score + ply
        } else {
            score - ply
        }
    } else {
        score
    }
}

fn score_from_tt(score: i32, ply: i32) -> i32 {
    if eval::is_mate_score(score) {
        if score > 0 {
            score - ply
        } else {
            score + ply
        }
    } else {
        score
    }
}

impl Searcher {
    /// Score the current position with alpha-beta minimax, `depth` plies
    /// below the root. Maximizing nodes are the perspective side's turn.
    ///
    /// A node whose move cannot be applied is logged and scored as a
    /// neutral 0 rather than aborting the search; the position is never
    /// left mutated.
    pub(super) fn minimax(
        &mut self,
        board: &mut Board,
        maximizing: bool,
        depth: i32,
        max_depth: i32,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.stats.nodes += 1;

        let remaining = (max_depth - depth).max(0);
        let key = TranspositionTable::key_for(board.zobrist(), maximizing);

        // A cached score is usable only when it was searched at least
        // as deep as this node requires, and only within its bound.
        if let Some(entry) = self.tt.probe(key) {
            if i32::from(entry.depth) >= remaining {
                self.stats.tt_hits += 1;
                let score = score_from_tt(entry.score, depth);
                match entry.flag {
                    TTFlag::Exact => return score,
                    TTFlag::LowerBound if score >= beta => {
                        self.stats.tt_cutoffs += 1;
                        return score;
                    }
                    TTFlag::UpperBound if score <= alpha => {
                        self.stats.tt_cutoffs += 1;
                        return score;
                    }
                    _ => {}
                }
            }
        }

        // Terminals, in precedence order: mate, draw, depth limit.
        if board.is_checkmate() {
            // The side to move is mated; at a maximizing node that is
            // the perspective side itself.
            let mate = eval::mate_in(depth);
            return if maximizing { -mate } else { mate };
        }
        if board.is_draw() {
            return self.draw_score;
        }
        if depth >= max_depth {
            return ply_adjusted(evaluate(board.position(), self.perspective), depth);
        }

        let moves = ordering::order_moves(board);
        if moves.is_empty() {
            // Unreachable past the terminal checks; score statically
            // rather than propagating an unbounded sentinel.
            return evaluate(board.position(), self.perspective);
        }

        let (alpha_orig, beta_orig) = (alpha, beta);
        let mut best = if maximizing { -INFINITY } else { INFINITY };

        for mv in &moves {
            let score = match board.apply(mv) {
                Ok(()) => {
                    let s = self.minimax(board, !maximizing, depth + 1, max_depth, alpha, beta);
                    board.undo();
                    s
                }
                Err(err) => {
                    log::warn!("search could not apply a generated move: {err}");
                    0
                }
            };

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }
            if beta <= alpha {
                break;
            }
        }

        // A pruned value is only a bound; tag it so a later probe can
        // tell the difference.
        let flag = if best <= alpha_orig {
            TTFlag::UpperBound
        } else if best >= beta_orig {
            TTFlag::LowerBound
        } else {
            TTFlag::Exact
        };
        self.tt.store(key, remaining as i8, score_to_tt(best, depth), flag);

        best
    }
}
