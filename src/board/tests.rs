use super::*;

#[test]
fn test_disc_opponent() {
    assert_eq!(Disc::Red.opponent(), Disc::Yellow);
    assert_eq!(Disc::Yellow.opponent(), Disc::Red);
    assert_eq!(Disc::Empty.opponent(), Disc::Empty);
}

#[test]
fn test_disc_char_roundtrip() {
    for disc in [Disc::Empty, Disc::Red, Disc::Yellow] {
        assert_eq!(Disc::from_char(disc.as_char()), Some(disc));
    }
    assert_eq!(Disc::from_char('x'), None);
}

#[test]
fn test_new_board_is_empty() {
    let board = Board::new(6, 7, 4);
    assert_eq!(board.rows(), 6);
    assert_eq!(board.cols(), 7);
    assert_eq!(board.win_length(), 4);
    assert_eq!(board.turn(), Disc::Red);
    for row in 0..6 {
        for col in 0..7 {
            assert_eq!(board.get(row, col), Disc::Empty);
        }
    }
    for col in 0..7 {
        assert_eq!(board.height(col), 0);
    }
    assert!(!board.is_full());
}

#[test]
fn test_drop_lands_at_bottom() {
    let mut board = Board::new(6, 7, 4);
    let token = board.drop_disc(3);
    assert_eq!(token.row(), 5);
    assert_eq!(token.col(), 3);
    assert_eq!(board.get(5, 3), Disc::Red);
    assert_eq!(board.height(3), 1);
}

#[test]
fn test_drops_stack_upward() {
    let mut board = Board::new(6, 7, 4);
    let _ = board.drop_disc(2);
    board.toggle_turn();
    let token = board.drop_disc(2);
    assert_eq!(token.row(), 4);
    assert_eq!(board.get(5, 2), Disc::Red);
    assert_eq!(board.get(4, 2), Disc::Yellow);
    assert_eq!(board.height(2), 2);
}

#[test]
fn test_column_fills_up() {
    let mut board = Board::new(4, 4, 4);
    for _ in 0..4 {
        assert!(board.is_legal(0));
        let _ = board.drop_disc(0);
    }
    assert!(!board.is_legal(0));
    assert!(board.is_legal(1));
}

#[test]
fn test_is_legal_out_of_range() {
    let board = Board::new(6, 7, 4);
    assert!(board.is_legal(6));
    assert!(!board.is_legal(7));
    assert!(!board.is_legal(100));
}

#[test]
fn test_is_full() {
    let mut board = Board::new(4, 4, 4);
    for col in 0..4 {
        for _ in 0..4 {
            let _ = board.drop_disc(col);
            board.toggle_turn();
        }
    }
    assert!(board.is_full());
}

#[test]
fn test_drop_undo_restores_board_exactly() {
    let mut board = Board::new(6, 7, 4);
    let _ = board.drop_disc(1);
    board.toggle_turn();
    let _ = board.drop_disc(1);
    board.toggle_turn();

    let before = board.clone();
    let token = board.drop_disc(1);
    board.undo_drop(token);
    assert_eq!(board, before, "drop followed by undo must restore the board bit-for-bit");
}

#[test]
fn test_undo_leaves_turn_untouched() {
    let mut board = Board::new(6, 7, 4);
    let token = board.drop_disc(0);
    assert_eq!(board.turn(), Disc::Red);
    board.undo_drop(token);
    assert_eq!(board.turn(), Disc::Red);
}

#[test]
fn test_toggle_turn() {
    let mut board = Board::new(6, 7, 4);
    board.toggle_turn();
    assert_eq!(board.turn(), Disc::Yellow);
    board.toggle_turn();
    assert_eq!(board.turn(), Disc::Red);
}

#[test]
fn test_recompute_heights_from_raw_grid() {
    let mut board = Board::new(6, 7, 4);
    board.set_cell(5, 0, Disc::Red);
    board.set_cell(4, 0, Disc::Yellow);
    board.set_cell(5, 3, Disc::Red);
    board.recompute_heights();
    assert_eq!(board.height(0), 2);
    assert_eq!(board.height(3), 1);
    assert_eq!(board.height(1), 0);
}

#[test]
fn test_recompute_heights_ignores_floating_discs() {
    let mut board = Board::new(6, 7, 4);
    // No disc below: not part of the bottom run, so not counted.
    board.set_cell(2, 4, Disc::Red);
    board.recompute_heights();
    assert_eq!(board.height(4), 0);
}

#[test]
fn test_row_chars_export() {
    let mut board = Board::new(6, 7, 4);
    let _ = board.drop_disc(0);
    board.toggle_turn();
    let _ = board.drop_disc(2);
    assert_eq!(board.row_chars(5), "R.Y....");
    assert_eq!(board.row_chars(0), ".......");
}
