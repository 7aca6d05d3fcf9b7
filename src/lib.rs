pub mod engine;
pub mod error;
pub mod game;
pub mod rules;

pub use engine::eval::evaluate;
pub use engine::search::{SearchLimits, Searcher};
pub use error::EngineError;
pub use game::{Game, PlayStatus};
pub use rules::Board;
pub use shakmaty;
