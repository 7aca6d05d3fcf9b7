//! Game session: one board, one searcher, one engine side.
//!
//! The session object owns everything a game needs (position, searcher,
//! transposition table), so independent games never share state.

use shakmaty::{Color, Move, Role, Square};

use crate::engine::search::{SearchLimits, Searcher};
use crate::error::EngineError;
use crate::rules::Board;

/// Outcome of a successfully applied player move.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PlayStatus {
    /// The game goes on; the engine may be asked to reply.
    Continue,
    /// The applied move ended the game.
    GameOver,
}

/// One chess game between a human player and the engine.
pub struct Game {
    board: Board,
    searcher: Searcher,
    engine_color: Color,
    limits: SearchLimits,
}

impl Game {
    /// Start a session from the given FEN, or from the standard
    /// starting position when `None`. A malformed FEN fails with
    /// `InvalidPosition` and no session is created.
    pub fn new(initial_fen: Option<&str>) -> Result<Self, EngineError> {
        let board = match initial_fen {
            Some(fen) => Board::from_fen(fen)?,
            None => Board::new(),
        };
        Ok(Game {
            board,
            searcher: Searcher::new(),
            engine_color: Color::Black,
            limits: SearchLimits::default(),
        })
    }

    /// Which side the engine plays. Defaults to black.
    pub fn set_engine_color(&mut self, color: Color) {
        self.engine_color = color;
    }

    pub fn engine_color(&self) -> Color {
        self.engine_color
    }

    /// Per-session search limits (depth cap, time budget, draw score).
    pub fn set_limits(&mut self, limits: SearchLimits) {
        self.limits = limits;
    }

    /// Apply the player's move given as source and destination squares
    /// (e.g. `"e2"`, `"e4"`) plus an optional promotion piece letter.
    ///
    /// An unparseable or illegal move fails with `IllegalMove`; the
    /// position is unchanged and the session stays usable.
    pub fn apply_player_move(
        &mut self,
        from: &str,
        to: &str,
        promotion: Option<char>,
    ) -> Result<PlayStatus, EngineError> {
        let from_sq: Square = from
            .parse()
            .map_err(|_| EngineError::IllegalMove(format!("bad square {from:?}")))?;
        let to_sq: Square = to
            .parse()
            .map_err(|_| EngineError::IllegalMove(format!("bad square {to:?}")))?;
        let promotion = match promotion {
            Some(c) => Some(
                Role::from_char(c.to_ascii_lowercase())
                    .ok_or_else(|| EngineError::IllegalMove(format!("bad promotion {c:?}")))?,
            ),
            None => None,
        };

        let mv = self.board.resolve(from_sq, to_sq, promotion)?;
        self.board.apply(&mv)?;

        Ok(if self.board.is_game_over() {
            PlayStatus::GameOver
        } else {
            PlayStatus::Continue
        })
    }

    /// Search for and play the engine's reply. Returns the applied move
    /// record, or `None` when it is not the engine's turn or the side
    /// to move has no legal move.
    pub fn compute_engine_move(&mut self) -> Option<Move> {
        if self.board.turn() != self.engine_color || self.board.is_game_over() {
            return None;
        }

        let limits = self.limits.clone();
        let mv = self.searcher.find_best_move(&mut self.board, &limits)?;
        if let Err(err) = self.board.apply(&mv) {
            log::error!("engine reply could not be applied: {err}");
            return None;
        }
        Some(mv)
    }

    /// Reset to the standard starting position and forget all cached
    /// search state.
    pub fn restart(&mut self) {
        self.board = Board::new();
        self.searcher.clear();
    }

    /// Squares occupied by the given piece type of the given color.
    pub fn pieces(&self, color: Color, role: Role) -> Vec<Square> {
        self.board.pieces(color, role)
    }

    pub fn fen(&self) -> String {
        self.board.fen()
    }

    pub fn turn(&self) -> Color {
        self.board.turn()
    }

    pub fn is_game_over(&self) -> bool {
        self.board.is_game_over()
    }

    pub fn is_check(&self) -> bool {
        self.board.is_check()
    }

    /// Counters from the engine's most recent search.
    pub fn search_stats(&self) -> &crate::engine::search::SearchStats {
        self.searcher.stats()
    }
}
