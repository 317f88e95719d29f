//! Board structure with gravity-constrained mutation
//!
//! The grid is stored row-major with row 0 at the top. A dropped disc
//! always lands at the lowest free cell of its column, so column `c` is
//! occupied in exactly its bottom `height(c)` cells and empty above.
//! The search engine mutates one `Board` in place and backtracks through
//! [`Board::undo_drop`], never by cloning the grid.

use super::Disc;

/// Game board with per-column fill levels and a turn indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    /// Run length needed to win ("X" in Connect X)
    win_length: usize,
    /// Row-major cells, row 0 at the top
    cells: Vec<Disc>,
    /// Occupied cells per column
    heights: Vec<usize>,
    /// Side to move
    turn: Disc,
}

/// Receipt for a single [`Board::drop_disc`] call.
///
/// Only the matching `undo_drop` accepts it, and it can neither be cloned
/// nor copied, so a drop can be undone exactly once and undos cannot be
/// reordered within a column.
#[derive(Debug)]
pub struct DropToken {
    row: usize,
    col: usize,
}

impl DropToken {
    /// Column the drop landed in
    #[inline]
    pub fn col(&self) -> usize {
        self.col
    }

    /// Row the disc came to rest at
    #[inline]
    pub fn row(&self) -> usize {
        self.row
    }
}

impl Board {
    /// Create an empty board. Red moves first.
    ///
    /// Callers are expected to validate the dimensions through
    /// [`crate::config::GameConfig`] before constructing a board.
    #[must_use]
    pub fn new(rows: usize, cols: usize, win_length: usize) -> Self {
        debug_assert!(rows >= 1 && cols >= 1);
        debug_assert!(win_length >= 2 && win_length <= rows.max(cols));
        Self {
            rows,
            cols,
            win_length,
            cells: vec![Disc::Empty; rows * cols],
            heights: vec![0; cols],
            turn: Disc::Red,
        }
    }

    /// Create an empty board from a validated configuration.
    #[must_use]
    pub fn from_config(config: &crate::config::GameConfig) -> Self {
        Self::new(config.rows, config.cols, config.win_length)
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn win_length(&self) -> usize {
        self.win_length
    }

    /// Side to move
    #[inline]
    pub fn turn(&self) -> Disc {
        self.turn
    }

    /// Overwrite the side to move (used when restoring a saved session)
    #[inline]
    pub fn set_turn(&mut self, turn: Disc) {
        debug_assert!(turn != Disc::Empty);
        self.turn = turn;
    }

    /// Get the disc at a cell
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Disc {
        debug_assert!(row < self.rows && col < self.cols);
        self.cells[row * self.cols + col]
    }

    /// Occupied cells in a column
    #[inline]
    pub fn height(&self, col: usize) -> usize {
        self.heights[col]
    }

    /// A move is legal iff the column exists and still has a free cell.
    #[inline]
    pub fn is_legal(&self, col: usize) -> bool {
        col < self.cols && self.heights[col] < self.rows
    }

    /// True iff every column is filled to the top
    #[inline]
    pub fn is_full(&self) -> bool {
        self.heights.iter().all(|&h| h == self.rows)
    }

    /// Flip the side to move
    #[inline]
    pub fn toggle_turn(&mut self) {
        self.turn = self.turn.opponent();
    }

    /// Drop the current side's disc into `col`.
    ///
    /// Does not validate: callers must check [`Board::is_legal`] first
    /// (the search engine does so on its hot path). Does not touch the
    /// turn indicator; sequencing turns is the caller's job.
    ///
    /// Returns the token that [`Board::undo_drop`] consumes to reverse
    /// exactly this placement.
    #[must_use = "keep the token if this drop may need to be undone"]
    pub fn drop_disc(&mut self, col: usize) -> DropToken {
        debug_assert!(self.is_legal(col), "drop into full or invalid column {col}");
        let row = self.rows - self.heights[col] - 1;
        self.cells[row * self.cols + col] = self.turn;
        self.heights[col] += 1;
        DropToken { row, col }
    }

    /// Reverse the drop that produced `token`.
    ///
    /// Valid only while the dropped disc is still the top of its column,
    /// which the token discipline guarantees for well-typed callers.
    pub fn undo_drop(&mut self, token: DropToken) {
        let DropToken { row, col } = token;
        debug_assert_eq!(
            self.rows - self.heights[col],
            row,
            "undo out of order for column {col}"
        );
        self.heights[col] -= 1;
        self.cells[row * self.cols + col] = Disc::Empty;
    }

    /// Raw cell write, bypassing gravity. Load-path only: after writing a
    /// full grid, call [`Board::recompute_heights`] to restore the fill
    /// levels before using the mutation API again.
    #[inline]
    pub fn set_cell(&mut self, row: usize, col: usize, disc: Disc) {
        debug_assert!(row < self.rows && col < self.cols);
        self.cells[row * self.cols + col] = disc;
    }

    /// Rebuild `heights` from the non-empty run length at the bottom of
    /// each column.
    pub fn recompute_heights(&mut self) {
        for col in 0..self.cols {
            let mut height = 0;
            while height < self.rows && self.get(self.rows - height - 1, col) != Disc::Empty {
                height += 1;
            }
            self.heights[col] = height;
        }
    }

    /// Export one row as save-file characters (see [`Disc::as_char`]).
    #[must_use]
    pub fn row_chars(&self, row: usize) -> String {
        (0..self.cols).map(|col| self.get(row, col).as_char()).collect()
    }
}
