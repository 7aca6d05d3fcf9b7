//! Rules-engine facade.
//!
//! Chess legality lives entirely in `shakmaty`: legal move generation,
//! check/mate/stalemate detection, FEN serialization, and position
//! hashing. This module wraps one live position behind the apply/undo
//! contract the search core works against, so the core never touches
//! position internals and never clones the position per branch.

use shakmaty::fen::Fen;
use shakmaty::uci::UciMove;
use shakmaty::zobrist::{Zobrist64, ZobristHash};
use shakmaty::{
    CastlingMode, Chess, Color, EnPassantMode, Move, MoveList, Piece, Position, Role, Square,
};

use crate::error::EngineError;

/// One live game position plus the undo stack backing `apply`/`undo`.
///
/// `shakmaty` positions are immutable values (`play` consumes), so the
/// facade snapshots the pre-move position on every apply. Callers see a
/// destructive apply/undo interface; `undo` restores the exact previous
/// state including castling and en-passant rights.
pub struct Board {
    pos: Chess,
    history: Vec<(Chess, Move)>,
}

impl Board {
    /// Standard starting position.
    pub fn new() -> Self {
        Board {
            pos: Chess::default(),
            history: Vec::new(),
        }
    }

    /// Construct from a FEN string. A malformed or illegal position is
    /// rejected wholesale.
    pub fn from_fen(fen: &str) -> Result<Self, EngineError> {
        let parsed: Fen = fen
            .trim()
            .parse()
            .map_err(|e| EngineError::InvalidPosition(format!("{fen}: {e}")))?;
        let pos = parsed
            .into_position(CastlingMode::Standard)
            .map_err(|e| EngineError::InvalidPosition(format!("{fen}: {e}")))?;
        Ok(Board {
            pos,
            history: Vec::new(),
        })
    }

    pub fn position(&self) -> &Chess {
        &self.pos
    }

    pub fn legal_moves(&self) -> MoveList {
        self.pos.legal_moves()
    }

    /// Apply a move. Fails with `IllegalMove` and leaves the position
    /// unchanged when the rules engine rejects it.
    pub fn apply(&mut self, mv: &Move) -> Result<(), EngineError> {
        let next = self.pos.clone().play(mv).map_err(|_| {
            EngineError::IllegalMove(mv.to_uci(CastlingMode::Standard).to_string())
        })?;
        let prev = std::mem::replace(&mut self.pos, next);
        self.history.push((prev, mv.clone()));
        Ok(())
    }

    /// Revert the most recent applied move. Returns the reverted move,
    /// or `None` when there is nothing to undo.
    pub fn undo(&mut self) -> Option<Move> {
        let (prev, mv) = self.history.pop()?;
        self.pos = prev;
        Some(mv)
    }

    /// Resolve a source/destination pair (plus optional promotion role)
    /// against the current legal moves. Castling input arrives as the
    /// king's drag (e.g. e1g1) and resolves through `UciMove`.
    pub fn resolve(
        &self,
        from: Square,
        to: Square,
        promotion: Option<Role>,
    ) -> Result<Move, EngineError> {
        let uci = UciMove::Normal {
            from,
            to,
            promotion,
        };
        uci.to_move(&self.pos)
            .map_err(|_| EngineError::IllegalMove(format!("{from}{to}")))
    }

    /// Speculatively apply `mv`, run `inspect` on the resulting
    /// position, then undo. The undo is unconditional: `inspect` is
    /// infallible by construction, so no path leaves the probe applied.
    pub fn probe_move<T>(
        &mut self,
        mv: &Move,
        inspect: impl FnOnce(&Board) -> T,
    ) -> Result<T, EngineError> {
        self.apply(mv)?;
        let out = inspect(&*self);
        self.undo();
        Ok(out)
    }

    pub fn turn(&self) -> Color {
        self.pos.turn()
    }

    pub fn is_check(&self) -> bool {
        self.pos.is_check()
    }

    pub fn is_checkmate(&self) -> bool {
        self.pos.is_checkmate()
    }

    pub fn is_stalemate(&self) -> bool {
        self.pos.is_stalemate()
    }

    /// Stalemate or dead position. Threefold/fifty-move claims are left
    /// to the presentation layer, which owns the claim decision.
    pub fn is_draw(&self) -> bool {
        self.pos.is_stalemate() || self.pos.is_insufficient_material()
    }

    pub fn is_game_over(&self) -> bool {
        self.pos.is_game_over()
    }

    /// Number of applied moves on the undo stack.
    pub fn ply(&self) -> usize {
        self.history.len()
    }

    pub fn fen(&self) -> String {
        Fen::from_position(self.pos.clone(), EnPassantMode::Legal).to_string()
    }

    /// Zobrist identity of the current position (placement, side to
    /// move, castling and en-passant rights).
    pub fn zobrist(&self) -> u64 {
        let z: Zobrist64 = self.pos.zobrist_hash(EnPassantMode::Legal);
        z.0
    }

    /// Squares occupied by the given piece type of the given color.
    pub fn pieces(&self, color: Color, role: Role) -> Vec<Square> {
        self.pos
            .board()
            .by_piece(Piece { color, role })
            .into_iter()
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
