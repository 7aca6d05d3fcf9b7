//! Chess engine components
//!
//! This module contains the core engine functionality:
//! - Static evaluation with square-value tables
//! - Bucket-ordered alpha-beta search with iterative deepening
//! - Transposition table

pub mod eval;
pub mod psqt;
pub mod search;
pub mod tt;

pub use eval::{evaluate, DRAW_SCORE, MATE_SCORE};
pub use search::{SearchLimits, SearchStats, Searcher};
pub use tt::{TTEntry, TTFlag, TranspositionTable};
