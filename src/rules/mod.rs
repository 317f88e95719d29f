//! Game rules for Connect X
//!
//! The only rule beyond gravity (which the board itself enforces) is the
//! win condition: a run of `win_length` same-colored discs along a row,
//! column, or diagonal.

pub mod win;

// Re-exports for convenient access
pub use win::is_won;
