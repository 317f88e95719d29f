//! Win condition checking for Connect X
//!
//! Every occupied cell is treated as a potential run start and checked in
//! the four forward directions; scanning backward directions as well would
//! only rediscover runs already found from their other end. A run longer
//! than `win_length` contains a run of exactly `win_length`, so it passes
//! the same check.
//!
//! This is a full re-scan on every call, O(rows * cols * win_length).
//! Cheap at the supported board sizes, and it keeps the detector free of
//! any incremental state to maintain.

use crate::board::{Board, Disc};

/// Forward scan directions: right, down, down-right, down-left.
const DIRECTIONS: [(i32, i32); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Check whether either side has completed a run of `win_length`.
///
/// Returns true on the first qualifying run found; the scan order only
/// affects how early the function exits, never the result.
#[must_use]
pub fn is_won(board: &Board) -> bool {
    for row in 0..board.rows() {
        for col in 0..board.cols() {
            if board.get(row, col) != Disc::Empty && starts_run(board, row, col) {
                return true;
            }
        }
    }
    false
}

/// Check the four forward directions from one occupied cell.
fn starts_run(board: &Board, row: usize, col: usize) -> bool {
    DIRECTIONS
        .iter()
        .any(|&(dr, dc)| runs_in_direction(board, row, col, dr, dc))
}

/// Check for `win_length - 1` further same-colored discs from
/// (`row`, `col`) along (`dr`, `dc`), bounds-checked against the edges.
fn runs_in_direction(board: &Board, row: usize, col: usize, dr: i32, dc: i32) -> bool {
    let span = (board.win_length() - 1) as i32;
    let end_row = row as i32 + dr * span;
    let end_col = col as i32 + dc * span;
    if end_row < 0
        || end_row >= board.rows() as i32
        || end_col < 0
        || end_col >= board.cols() as i32
    {
        return false;
    }

    let side = board.get(row, col);
    (1..=span).all(|step| {
        let r = (row as i32 + dr * step) as usize;
        let c = (col as i32 + dc * step) as usize;
        board.get(r, c) == side
    })
}
