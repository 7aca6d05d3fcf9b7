//! Search limits, stats, and constants.

use crate::engine::eval::DRAW_SCORE;

#[derive(Clone, Debug)]
pub struct SearchLimits {
    /// Hard depth cap; `None` leaves only the time budget in charge.
    pub depth: Option<i32>,
    /// Time budget in milliseconds. Checked between completed depth
    /// levels, never inside one, so a search may overrun by at most one
    /// additional level.
    pub movetime: Option<u64>,
    /// Score assigned to stalemate and dead positions. 0 is
    /// draw-neutral; set negative to avoid draws, positive to seek them.
    pub draw_score: i32,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            depth: None,
            movetime: Some(DEFAULT_MOVETIME_MS),
            draw_score: DRAW_SCORE,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct SearchStats {
    pub nodes: u64,
    pub tt_hits: u64,
    pub tt_cutoffs: u64,
    /// Score of the best move at the deepest completed level.
    pub best_score: i32,
}

pub const INFINITY: i32 = 2_000_000;
pub const MIN_DEPTH: i32 = 2;
pub const MAX_DEPTH: i32 = 64;
pub const DEFAULT_MOVETIME_MS: u64 = 3000;
