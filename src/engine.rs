//! Engine front-end tying the search to a difficulty setting
//!
//! The session layer talks to [`Engine`] only: it hands over the shared
//! board with the engine's side to move and gets back one column to
//! play. Difficulty levels map to search depth, with the hard setting
//! bumped one extra ply.
//!
//! # Example
//!
//! ```
//! use connectx::{Board, Disc, Engine};
//!
//! let mut board = Board::new(6, 7, 4);
//! let _ = board.drop_disc(3); // Red opens
//! board.toggle_turn();
//!
//! let engine = Engine::new(Disc::Yellow);
//! let result = engine.choose_move(&mut board, 2);
//! assert!(result.column.is_some());
//! ```

use std::time::Instant;

use crate::board::{Board, Disc};
use crate::search::{Role, Searcher};

/// A chosen move with search diagnostics.
#[derive(Debug, Clone, Copy)]
pub struct MoveResult {
    /// Column to play; `None` means the engine concedes (every line of
    /// play loses and no tie-break ever selected a column).
    pub column: Option<usize>,
    /// Minimax value of the position from the engine's perspective
    pub score: i32,
    /// Nodes visited by the search
    pub nodes: u64,
    /// Wall-clock search time in milliseconds
    pub time_ms: u64,
}

/// The artificial opponent.
pub struct Engine {
    side: Disc,
}

impl Engine {
    /// Create an engine playing the given side.
    #[must_use]
    pub fn new(side: Disc) -> Self {
        debug_assert!(side != Disc::Empty);
        Self { side }
    }

    /// The side this engine plays
    #[must_use]
    pub fn side(&self) -> Disc {
        self.side
    }

    /// Search depth for a difficulty level. Levels 1 and 2 search their
    /// own depth; level 3 gets one extra ply for a harder game.
    #[must_use]
    pub fn search_depth(difficulty: u8) -> u8 {
        if difficulty >= 3 {
            difficulty + 1
        } else {
            difficulty
        }
    }

    /// Pick a column for the current position.
    ///
    /// The board must have the engine's side to move; it is mutated
    /// during the search and restored exactly before returning.
    #[must_use]
    pub fn choose_move(&self, board: &mut Board, difficulty: u8) -> MoveResult {
        debug_assert_eq!(board.turn(), self.side, "engine asked to move out of turn");

        let start = Instant::now();
        let depth = Self::search_depth(difficulty);
        let mut searcher = Searcher::new(self.side, depth);
        let result = searcher.search(board, depth, Role::Maximizer);

        MoveResult {
            column: result.column,
            score: result.score,
            nodes: searcher.nodes(),
            time_ms: start.elapsed().as_millis() as u64,
        }
    }
}
