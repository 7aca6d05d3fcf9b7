//! Search: iterative deepening, alpha-beta minimax, move ordering.

mod alphabeta;
mod ordering;
mod searcher;
mod types;

pub use ordering::{classify, order_moves, MoveClass};
pub use searcher::Searcher;
pub use types::{SearchLimits, SearchStats, MAX_DEPTH, MIN_DEPTH};
