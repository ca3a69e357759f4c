use super::*;
use crate::error::BoardError;

#[test]
fn test_player_opponent() {
    assert_eq!(Player::First.opponent(), Player::Second);
    assert_eq!(Player::Second.opponent(), Player::First);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(3, 3); // Center of 7x7
    assert_eq!(pos.to_index(7), 24);

    let pos2 = Pos::from_index(24, 7);
    assert_eq!(pos2, pos);
}

#[test]
fn test_pos_offset_bounds() {
    let pos = Pos::new(0, 0);
    assert_eq!(pos.offset(2, 1, 7, 7), Some(Pos::new(2, 1)));
    assert_eq!(pos.offset(-1, 0, 7, 7), None);
    assert_eq!(Pos::new(6, 6).offset(1, 0, 7, 7), None);
}

#[test]
fn test_manhattan() {
    assert_eq!(Pos::new(0, 0).manhattan(Pos::new(3, 4)), 7);
    assert_eq!(Pos::new(5, 1).manhattan(Pos::new(2, 3)), 5);
}

#[test]
fn test_board_dimensions() {
    let board = Board::new(8, 8).unwrap();
    assert_eq!(board.cells(), 64);
    assert_eq!(
        Board::new(9, 8),
        Err(BoardError::InvalidDimensions { width: 9, height: 8 })
    );
    assert!(Board::new(0, 5).is_err());
}

#[test]
fn test_default_board() {
    let board = Board::default();
    assert_eq!(board.width(), DEFAULT_WIDTH);
    assert_eq!(board.height(), DEFAULT_HEIGHT);
    assert_eq!(board.move_count(), 0);
    assert_eq!(board.active_player(), Player::First);
    assert!(board.blocked().is_empty());
}

#[test]
fn test_apply_move_blocks_and_switches() {
    let mut board = Board::default();
    board.apply_move(Pos::new(2, 3)).unwrap();

    assert_eq!(board.player_location(Player::First), Some(Pos::new(2, 3)));
    assert_eq!(board.player_location(Player::Second), None);
    assert_eq!(board.active_player(), Player::Second);
    assert_eq!(board.move_count(), 1);
    assert!(!board.is_blank(Pos::new(2, 3)));
    assert_eq!(board.blocked().count(), 1);
}

#[test]
fn test_forecast_leaves_original_untouched() {
    let board = Board::default();
    let next = board.forecast_move(Pos::new(0, 0)).unwrap();

    assert_eq!(board.move_count(), 0);
    assert!(board.is_blank(Pos::new(0, 0)));
    assert_eq!(next.move_count(), 1);
    assert!(!next.is_blank(Pos::new(0, 0)));
}

#[test]
fn test_illegal_move_rejected() {
    let mut board = Board::default();
    board.apply_move(Pos::new(3, 3)).unwrap();
    board.apply_move(Pos::new(0, 0)).unwrap();

    // Not a knight move for First
    let err = board.forecast_move(Pos::new(3, 4)).unwrap_err();
    assert_eq!(
        err,
        BoardError::IllegalMove {
            pos: Pos::new(3, 4),
            player: Player::First
        }
    );
    // Off the board
    assert!(board.forecast_move(Pos::new(9, 9)).is_err());
}

#[test]
fn test_blank_cells_row_major() {
    let mut board = Board::new(2, 2).unwrap();
    board.apply_move(Pos::new(0, 1)).unwrap();
    let blanks: Vec<Pos> = board.blank_cells().collect();
    assert_eq!(blanks, vec![Pos::new(0, 0), Pos::new(1, 0), Pos::new(1, 1)]);
}
