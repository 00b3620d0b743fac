//! Tests for the board position enum.

use tictactoe::{Game, Position};

#[test]
fn test_position_to_index() {
    assert_eq!(Position::TopLeft.to_index(), 0);
    assert_eq!(Position::Center.to_index(), 4);
    assert_eq!(Position::BottomRight.to_index(), 8);
}

#[test]
fn test_position_from_index() {
    assert_eq!(Position::from_index(0), Some(Position::TopLeft));
    assert_eq!(Position::from_index(4), Some(Position::Center));
    assert_eq!(Position::from_index(8), Some(Position::BottomRight));
    assert_eq!(Position::from_index(9), None);
}

#[test]
fn test_valid_moves_empty_board() {
    let game = Game::new();
    let valid = Position::valid_moves(game.state().board());
    assert_eq!(valid.len(), 9);
}

#[test]
fn test_valid_moves_filters_occupied() {
    let mut game = Game::new();
    game.make_move(0).unwrap();
    game.make_move(4).unwrap();

    let valid = Position::valid_moves(game.state().board());
    assert_eq!(valid.len(), 7);
    assert!(!valid.contains(&Position::TopLeft));
    assert!(!valid.contains(&Position::Center));
    assert!(valid.contains(&Position::BottomRight));
}

#[test]
fn test_labels() {
    assert_eq!(Position::TopLeft.label(), "Top-left");
    assert_eq!(Position::Center.to_string(), "Center");
}
