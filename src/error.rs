//! Engine error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// The starting position string could not be parsed into a playable
    /// position. No session is created.
    #[error("invalid position: {0}")]
    InvalidPosition(String),

    /// The rules engine rejected an attempted move. The position is left
    /// unchanged.
    #[error("illegal move: {0}")]
    IllegalMove(String),
}
