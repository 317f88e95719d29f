//! Connect X game engine
//!
//! An N-in-a-row connection game on a configurable grid (4-10 rows,
//! 4-20 columns, run length 4 up to the larger dimension), with a
//! minimax opponent and a terminal front-end supporting save/resume.
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: grid representation with gravity-constrained drop/undo
//! - [`config`]: session settings and their validators
//! - [`rules`]: win detection
//! - [`eval`]: positional heuristic used at the search leaves
//! - [`search`]: fixed-depth minimax with a root tie-break refinement
//! - [`engine`]: difficulty-aware front-end to the search
//! - [`save`]: session persistence (save after every move, resume later)
//! - [`ui`]: terminal session loop, prompts, and board rendering
//!
//! # Quick Start
//!
//! ```
//! use connectx::{Board, Disc, Engine};
//!
//! let mut board = Board::new(6, 7, 4);
//!
//! // Red (the human side) opens in the middle.
//! let _ = board.drop_disc(3);
//! board.toggle_turn();
//!
//! // The engine answers for Yellow.
//! let engine = Engine::new(Disc::Yellow);
//! let result = engine.choose_move(&mut board, 2);
//! if let Some(col) = result.column {
//!     let _ = board.drop_disc(col);
//!     board.toggle_turn();
//! }
//! ```
//!
//! # Search
//!
//! The opponent runs a plain fixed-depth minimax — no pruning beyond an
//! early exit once a forced win appears — over a single shared board,
//! backtracking through an exact-inverse undo instead of cloning. Depth
//! follows the difficulty setting (1, 2, or 4 plies), which keeps the
//! worst case comfortably bounded on the supported board sizes.

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod save;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Disc, DropToken};
pub use config::GameConfig;
pub use engine::{Engine, MoveResult};
