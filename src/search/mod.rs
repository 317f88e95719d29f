//! Adversarial search for Connect X
//!
//! A fixed-depth, single-threaded minimax over one shared board. All
//! backtracking goes through the board's drop/undo pair, so the search
//! allocates nothing per node.

pub mod minimax;

pub use minimax::{Role, SearchResult, Searcher};
