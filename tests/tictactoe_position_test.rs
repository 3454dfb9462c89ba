//! Tests for board positions and empty-cell enumeration.

use strictly_tictac::{Board, FixedRandom, Game, MoveError, Position};

#[test]
fn test_position_to_index() {
    assert_eq!(Position::new(0, 0).unwrap().to_index(), 0);
    assert_eq!(Position::new(1, 1).unwrap().to_index(), 4);
    assert_eq!(Position::new(2, 2).unwrap().to_index(), 8);
}

#[test]
fn test_position_from_index() {
    assert_eq!(Position::from_index(4), Some(Position::new(1, 1).unwrap()));
    assert_eq!(Position::from_index(9), None);
}

#[test]
fn test_position_out_of_range() {
    assert_eq!(
        Position::new(1, 3),
        Err(MoveError::CoordinateOutOfRange { x: 1, y: 3 })
    );
}

#[test]
fn test_empty_positions_empty_board() {
    let board = Board::new();
    assert_eq!(board.empty_positions(), Position::ALL.to_vec());
}

#[test]
fn test_empty_positions_filters_occupied() {
    let mut game = Game::with_random(FixedRandom(0.5));
    game.accept_user_move(0, 0).unwrap();
    game.accept_user_move(1, 1).unwrap();

    let empty = game.board().empty_positions();
    assert_eq!(empty.len(), 7);
    assert!(!empty.contains(&Position::new(0, 0).unwrap()));
    assert!(!empty.contains(&Position::new(1, 1).unwrap()));
    assert!(empty.contains(&Position::new(2, 2).unwrap()));
}
