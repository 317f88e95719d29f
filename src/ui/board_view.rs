//! Text rendering of the board
//!
//! Cells are drawn in a boxed grid with a 1-based column legend under
//! it, the way the prompts number columns.

use crate::board::{Board, Disc};

/// Width of one cell including its left border.
const CELL_WIDTH: usize = 6;

/// Render the board as a boxed grid with a column legend.
#[must_use]
pub fn render(board: &Board) -> String {
    let cols = board.cols();
    let row_divider = format!("{}|", "|-----".repeat(cols));
    let full_line = |fill: &str| format!("|{}|", fill.repeat(CELL_WIDTH * cols - 1));

    let mut out = String::new();
    out.push_str(&row_divider);
    out.push('\n');
    for row in 0..board.rows() {
        for col in 0..cols {
            let cell = match board.get(row, col) {
                Disc::Empty => ' ',
                disc => disc.as_char(),
            };
            out.push_str(&format!("|  {cell}  "));
        }
        out.push_str("|\n");
        out.push_str(&row_divider);
        out.push('\n');
    }

    out.push_str(&full_line("-"));
    out.push('\n');
    for col in 1..=cols {
        if col <= 9 {
            out.push_str(&format!("|  {col}  "));
        } else {
            out.push_str(&format!("|  {col} "));
        }
    }
    out.push_str("|\n");
    out.push_str(&full_line("="));
    out.push('\n');
    out
}
