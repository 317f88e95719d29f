//! Position evaluation for Connect X
//!
//! Contains:
//! - The win/loss sentinel and window weighting constants
//! - The window-based heuristic used at the leaves of the search

pub mod heuristic;
pub mod score;

pub use heuristic::evaluate;
pub use score::Score;
