//! Searcher: iterative deepening driver and search entry point.

use std::time::{Duration, Instant};

use shakmaty::{Color, Move};

use crate::engine::eval;
use crate::engine::tt::TranspositionTable;
use crate::rules::Board;

use super::ordering;
use super::types::{SearchLimits, SearchStats, DEFAULT_MOVETIME_MS, INFINITY, MAX_DEPTH, MIN_DEPTH};

/// One search session: transposition table, counters, clock, and the
/// perspective scores are expressed in. Owned by a `Game`, never
/// shared.
pub struct Searcher {
    pub(super) tt: TranspositionTable,
    pub(super) stats: SearchStats,
    pub(super) perspective: Color,
    pub(super) draw_score: i32,
    start_time: Instant,
}

impl Searcher {
    pub fn new() -> Self {
        Searcher {
            tt: TranspositionTable::default(),
            stats: SearchStats::default(),
            perspective: Color::White,
            draw_score: eval::DRAW_SCORE,
            start_time: Instant::now(),
        }
    }

    pub fn set_hash_size(&mut self, size_mb: usize) {
        self.tt = TranspositionTable::new(size_mb);
    }

    /// Drop all cached state. Called on game restart.
    pub fn clear(&mut self) {
        self.tt.clear();
    }

    /// Counters from the most recent `find_best_move` call.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Pick the best move for the side to move, by iterative-deepening
    /// alpha-beta minimax. Returns `None` when no legal move exists.
    ///
    /// Depth starts at 2 and grows one level at a time; the time budget
    /// is consulted only after a level completes, so every returned
    /// move is the best of a fully searched level and the worst-case
    /// overrun is one extra level.
    pub fn find_best_move(&mut self, board: &mut Board, limits: &SearchLimits) -> Option<Move> {
        self.start_time = Instant::now();
        self.stats = SearchStats::default();
        self.tt.new_search();
        self.perspective = board.turn();
        self.draw_score = limits.draw_score;

        let budget = Duration::from_millis(limits.movetime.unwrap_or(DEFAULT_MOVETIME_MS));
        let depth_cap = limits.depth.unwrap_or(MAX_DEPTH).max(MIN_DEPTH);

        let root_moves = ordering::order_moves(board);
        if root_moves.is_empty() {
            return None;
        }

        let mut best: Option<(Move, i32)> = None;
        let mut depth = MIN_DEPTH;

        loop {
            let mut level_best: Option<(Move, i32)> = None;

            for mv in &root_moves {
                if let Err(err) = board.apply(mv) {
                    log::warn!("skipping unsearchable root move: {err}");
                    continue;
                }
                let score = self.minimax(board, false, 1, depth, -INFINITY, INFINITY);
                board.undo();

                if level_best.as_ref().map_or(true, |(_, s)| score > *s) {
                    level_best = Some((mv.clone(), score));
                }
            }

            // The level ran to completion; only now consult the clock.
            if let Some((mv, score)) = level_best {
                log::info!(
                    "depth {depth} score {score} nodes {} time {}ms best {}",
                    self.stats.nodes,
                    self.start_time.elapsed().as_millis(),
                    mv.to_uci(shakmaty::CastlingMode::Standard),
                );
                self.stats.best_score = score;
                best = Some((mv, score));
            }

            let mate_proven = best
                .as_ref()
                .is_some_and(|(_, score)| eval::is_mate_score(*score));
            if depth >= depth_cap || self.start_time.elapsed() >= budget || mate_proven {
                break;
            }
            depth += 1;
        }

        log::debug!(
            "search done: tt hits {} cutoffs {} hashfull {}",
            self.stats.tt_hits,
            self.stats.tt_cutoffs,
            self.tt.hashfull(),
        );
        best.map(|(mv, _)| mv)
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new()
    }
}
