//! Heuristic evaluation function for Connect X board positions
//!
//! The evaluator slides a window of `win_length` cells along every row,
//! column, and diagonal and rewards windows a side has already started:
//! a window holding any opposing disc is dead and contributes nothing; a
//! window with two or more own discs contributes more the closer it is
//! to completion and the fewer drops it would take to finish, where the
//! cost of an empty cell is the number of drops needed to fill it via
//! gravity (the cell itself plus every empty cell below it).
//!
//! A completed window short-circuits the whole evaluation with
//! [`Score::WIN`] so the search can recognize decided positions by exact
//! value.
//!
//! Each axis is scanned separately: the four scans share the window
//! arithmetic but differ in how window cells map to grid cells and in
//! the completion cost (a vertical window's empties always sit directly
//! on its filled run, so its cost is just the number of empties).

use crate::board::{Board, Disc};

use super::score::Score;

/// Evaluate the board from the perspective of the given side.
///
/// Returns a score where:
/// - Positive values indicate advantage for `side`
/// - Negative values indicate disadvantage for `side`
/// - Exactly [`Score::WIN`] when `side` has a completed run
/// - Exactly `-Score::WIN` when the opponent has one
///
/// An axis too short to hold a full window is skipped entirely; the two
/// per-side axis totals are rounded independently before subtracting,
/// which keeps `evaluate(board, a) == -evaluate(board, b)` exact.
#[must_use]
pub fn evaluate(board: &Board, side: Disc) -> i32 {
    debug_assert!(side != Disc::Empty);
    let opponent = side.opponent();
    let x = board.win_length();
    let mut score = 0i32;

    if x <= board.cols() {
        let own = score_rows(board, side);
        let theirs = score_rows(board, opponent);
        if own == Score::WIN {
            return Score::WIN;
        }
        if theirs == Score::WIN {
            return -Score::WIN;
        }
        score += own - theirs;
    }

    if x <= board.rows() {
        let own = score_columns(board, side);
        let theirs = score_columns(board, opponent);
        if own == Score::WIN {
            return Score::WIN;
        }
        if theirs == Score::WIN {
            return -Score::WIN;
        }
        score += own - theirs;
    }

    if x <= board.rows() && x <= board.cols() {
        let own = score_diagonals_down(board, side);
        let theirs = score_diagonals_down(board, opponent);
        if own == Score::WIN {
            return Score::WIN;
        }
        if theirs == Score::WIN {
            return -Score::WIN;
        }
        score += own - theirs;

        let own = score_diagonals_up(board, side);
        let theirs = score_diagonals_up(board, opponent);
        if own == Score::WIN {
            return Score::WIN;
        }
        if theirs == Score::WIN {
            return -Score::WIN;
        }
        score += own - theirs;
    }

    score
}

/// Value of one started window: `100 * (own / x) * (2 / moves_needed)`.
///
/// `moves_needed >= 1` whenever a window is scored: a started, uncompleted
/// window has at least one empty cell, and every empty cell costs at least
/// the drop into itself.
#[inline]
fn window_value(own: usize, x: usize, moves_needed: usize) -> f64 {
    debug_assert!(moves_needed >= 1);
    Score::WINDOW_WEIGHT * (own as f64 / x as f64)
        * (Score::URGENCY_WEIGHT / moves_needed as f64)
}

/// Drops needed to fill (`row`, `col`): the cell itself plus every empty
/// cell below it in the same column, down to the floor or the nearest
/// occupied cell.
#[inline]
fn fill_cost(board: &Board, row: usize, col: usize) -> usize {
    let mut cost = 0;
    let mut r = row;
    while r < board.rows() && board.get(r, col) == Disc::Empty {
        cost += 1;
        r += 1;
    }
    cost
}

/// Score every horizontal window for one side. Accumulates as a real
/// number and rounds once at the end, matching the other axis scans.
fn score_rows(board: &Board, side: Disc) -> i32 {
    let x = board.win_length();
    let blocker = side.opponent();
    let mut total = 0.0f64;

    for row in 0..board.rows() {
        for start in 0..=(board.cols() - x) {
            let mut own = 0;
            for col in start..start + x {
                let disc = board.get(row, col);
                if disc == side {
                    own += 1;
                } else if disc == blocker {
                    own = 0;
                    break;
                }
            }
            if own < 2 {
                continue;
            }
            if own == x {
                return Score::WIN;
            }

            let mut moves_needed = 0;
            for col in start..start + x {
                if board.get(row, col) == Disc::Empty {
                    moves_needed += fill_cost(board, row, col);
                }
            }
            total += window_value(own, x, moves_needed);
        }
    }

    total.round() as i32
}

/// Score every vertical window for one side.
///
/// Any vertical window holding a disc overlaps its column's filled run
/// from below, so its empty cells stack directly on top of it: each one
/// costs exactly one drop and the completion cost collapses to the
/// number of empties.
fn score_columns(board: &Board, side: Disc) -> i32 {
    let x = board.win_length();
    let blocker = side.opponent();
    let mut total = 0.0f64;

    for col in 0..board.cols() {
        for start in 0..=(board.rows() - x) {
            let mut own = 0;
            for row in start..start + x {
                let disc = board.get(row, col);
                if disc == side {
                    own += 1;
                } else if disc == blocker {
                    own = 0;
                    break;
                }
            }
            if own < 2 {
                continue;
            }
            if own == x {
                return Score::WIN;
            }

            total += window_value(own, x, x - own);
        }
    }

    total.round() as i32
}

/// Score every down-right ("\") diagonal window for one side.
fn score_diagonals_down(board: &Board, side: Disc) -> i32 {
    let x = board.win_length();
    let blocker = side.opponent();
    let mut total = 0.0f64;

    for start_row in 0..=(board.rows() - x) {
        for start_col in 0..=(board.cols() - x) {
            let mut own = 0;
            for step in 0..x {
                let disc = board.get(start_row + step, start_col + step);
                if disc == side {
                    own += 1;
                } else if disc == blocker {
                    own = 0;
                    break;
                }
            }
            if own < 2 {
                continue;
            }
            if own == x {
                return Score::WIN;
            }

            let mut moves_needed = 0;
            for step in 0..x {
                let (row, col) = (start_row + step, start_col + step);
                if board.get(row, col) == Disc::Empty {
                    moves_needed += fill_cost(board, row, col);
                }
            }
            total += window_value(own, x, moves_needed);
        }
    }

    total.round() as i32
}

/// Score every up-right ("/") diagonal window for one side. Windows are
/// anchored at their bottom-left cell and walked up-right.
fn score_diagonals_up(board: &Board, side: Disc) -> i32 {
    let x = board.win_length();
    let blocker = side.opponent();
    let mut total = 0.0f64;

    for start_row in (x - 1)..board.rows() {
        for start_col in 0..=(board.cols() - x) {
            let mut own = 0;
            for step in 0..x {
                let disc = board.get(start_row - step, start_col + step);
                if disc == side {
                    own += 1;
                } else if disc == blocker {
                    own = 0;
                    break;
                }
            }
            if own < 2 {
                continue;
            }
            if own == x {
                return Score::WIN;
            }

            let mut moves_needed = 0;
            for step in 0..x {
                let (row, col) = (start_row - step, start_col + step);
                if board.get(row, col) == Disc::Empty {
                    moves_needed += fill_cost(board, row, col);
                }
            }
            total += window_value(own, x, moves_needed);
        }
    }

    total.round() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from_rows(rows: &[&str], win_length: usize) -> Board {
        let mut board = Board::new(rows.len(), rows[0].len(), win_length);
        for (r, line) in rows.iter().enumerate() {
            for (c, ch) in line.chars().enumerate() {
                board.set_cell(r, c, Disc::from_char(ch).expect("valid test grid char"));
            }
        }
        board.recompute_heights();
        board
    }

    #[test]
    fn test_empty_board_scores_zero() {
        let board = Board::new(6, 7, 4);
        assert_eq!(evaluate(&board, Disc::Red), 0);
        assert_eq!(evaluate(&board, Disc::Yellow), 0);
    }

    #[test]
    fn test_single_disc_scores_zero() {
        // The heuristic only rewards started lines, never lone discs.
        let board = board_from_rows(
            &[
                ".......",
                ".......",
                ".......",
                ".......",
                ".......",
                "...R...",
            ],
            4,
        );
        assert_eq!(evaluate(&board, Disc::Red), 0);
    }

    #[test]
    fn test_horizontal_pair_on_floor() {
        // One live window (cols 0..4): 2 own discs, both empties playable
        // at cost 1 each => 100 * (2/4) * (2/2) = 50.
        let board = board_from_rows(
            &[
                ".......",
                ".......",
                ".......",
                ".......",
                ".......",
                "RR.....",
            ],
            4,
        );
        assert_eq!(evaluate(&board, Disc::Red), 50);
        assert_eq!(evaluate(&board, Disc::Yellow), -50);
    }

    #[test]
    fn test_vertical_pair() {
        // One live window (rows 2..6): 2 own discs, 2 drops to finish
        // => 100 * (2/4) * (2/2) = 50.
        let board = board_from_rows(
            &[
                ".......",
                ".......",
                ".......",
                ".......",
                "R......",
                "R......",
            ],
            4,
        );
        assert_eq!(evaluate(&board, Disc::Red), 50);
    }

    #[test]
    fn test_blocked_window_contributes_nothing() {
        let board = board_from_rows(
            &[
                ".......",
                ".......",
                ".......",
                ".......",
                ".......",
                "RRYY...",
            ],
            4,
        );
        // Red's pair is dead; Yellow still has a live window on cols 2..6
        // worth 50, so Red is behind by exactly that much.
        assert_eq!(evaluate(&board, Disc::Red), -50);
        assert_eq!(evaluate(&board, Disc::Yellow), 50);
    }

    #[test]
    fn test_down_diagonal_pair() {
        // Window anchored at (2,0): discs at (2,0) and (3,1), empties at
        // (4,2) cost 2 and (5,3) cost 1 => 100 * (2/4) * (2/3) = 33.33.
        let board = board_from_rows(
            &[
                ".......",
                ".......",
                "R......",
                "YR.....",
                "Y......",
                "Y......",
            ],
            4,
        );
        // Yellow's column-0 stack never scores: every vertical window on
        // that column also holds the Red disc at (2,0).
        assert_eq!(evaluate(&board, Disc::Red), 33);
    }

    #[test]
    fn test_up_diagonal_pair() {
        // Window anchored at (5,1): discs at (5,1) and (4,2), empties at
        // (3,3) cost 3 and (2,4) cost 4 => 100 * (2/4) * (2/7) = 14.29.
        let board = board_from_rows(
            &[
                ".......",
                ".......",
                ".......",
                ".......",
                "..R....",
                ".R.....",
            ],
            4,
        );
        // Gravity-inconsistent on purpose: the evaluator reads cells only.
        assert_eq!(evaluate(&board, Disc::Red), 14);
    }

    #[test]
    fn test_completed_run_is_exactly_the_sentinel() {
        let board = board_from_rows(
            &[
                ".......",
                ".......",
                ".......",
                ".......",
                ".......",
                "RRRR...",
            ],
            4,
        );
        assert_eq!(evaluate(&board, Disc::Red), Score::WIN);
        assert_eq!(evaluate(&board, Disc::Yellow), -Score::WIN);
    }

    #[test]
    fn test_sentinel_ignores_other_board_content() {
        // Yellow has material elsewhere; a completed Red run still
        // evaluates to exactly the sentinel.
        let board = board_from_rows(
            &[
                ".......",
                ".......",
                ".......",
                "....YY.",
                "....YY.",
                "RRRRYY.",
            ],
            4,
        );
        assert_eq!(evaluate(&board, Disc::Red), Score::WIN);
        assert_eq!(evaluate(&board, Disc::Yellow), -Score::WIN);
    }

    #[test]
    fn test_vertical_sentinel() {
        let board = board_from_rows(
            &[
                ".......",
                ".......",
                "Y......",
                "Y......",
                "Y......",
                "Y......",
            ],
            4,
        );
        assert_eq!(evaluate(&board, Disc::Yellow), Score::WIN);
        assert_eq!(evaluate(&board, Disc::Red), -Score::WIN);
    }

    #[test]
    fn test_antisymmetry() {
        let board = board_from_rows(
            &[
                ".......",
                ".......",
                ".......",
                "..Y....",
                "..YR...",
                ".RYR...",
            ],
            4,
        );
        let red = evaluate(&board, Disc::Red);
        let yellow = evaluate(&board, Disc::Yellow);
        assert_eq!(red, -yellow, "evaluation must be antisymmetric in the sides");
    }

    #[test]
    fn test_closer_to_completion_scores_higher() {
        let pair = board_from_rows(
            &[
                ".......",
                ".......",
                ".......",
                ".......",
                ".......",
                "RR.....",
            ],
            4,
        );
        let triple = board_from_rows(
            &[
                ".......",
                ".......",
                ".......",
                ".......",
                ".......",
                "RRR....",
            ],
            4,
        );
        assert!(
            evaluate(&triple, Disc::Red) > evaluate(&pair, Disc::Red),
            "three in a row must outscore two in a row"
        );
    }

    #[test]
    fn test_playable_window_outscores_elevated_window() {
        // Same pair, but the elevated window's empties need backfilling
        // first, so it is worth less.
        let floor = board_from_rows(
            &[
                ".......",
                ".......",
                ".......",
                ".......",
                ".......",
                "...RR..",
            ],
            4,
        );
        let elevated = board_from_rows(
            &[
                ".......",
                ".......",
                ".......",
                ".......",
                "...RR..",
                "...YY..",
            ],
            4,
        );
        let floor_score = evaluate(&floor, Disc::Red);
        let elevated_score = evaluate(&elevated, Disc::Red);
        assert!(
            floor_score > elevated_score,
            "floor pair ({floor_score}) should outscore elevated pair ({elevated_score})"
        );
    }

    #[test]
    fn test_vertical_axis_skipped_on_short_boards() {
        // 4 rows, win length 5: no vertical or diagonal window fits, and
        // Red's column stack must contribute nothing.
        let board = board_from_rows(
            &[
                "R.....",
                "R.....",
                "R.....",
                "R.....",
            ],
            5,
        );
        assert_eq!(evaluate(&board, Disc::Red), 0);
    }
}
