//! Draw detection logic for tic-tac-toe.

use super::win::check_winner;
use crate::types::Board;

/// Checks if the board is full (all squares occupied).
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// Checks if the game is a draw: full board with no winner.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Player, Square};
    use crate::Position;

    fn fill(board: &mut Board, marks: [Player; 9]) {
        for (i, player) in marks.into_iter().enumerate() {
            board.set(
                Position::from_index(i).unwrap(),
                Square::Occupied(player),
            );
        }
    }

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Player::X));
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        let mut board = Board::new();
        // X O X / O X X / O X O - full, no line
        fill(
            &mut board,
            [
                Player::X,
                Player::O,
                Player::X,
                Player::O,
                Player::X,
                Player::X,
                Player::O,
                Player::X,
                Player::O,
            ],
        );
        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let mut board = Board::new();
        // X wins the top row
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::TopCenter, Square::Occupied(Player::X));
        board.set(Position::TopRight, Square::Occupied(Player::X));
        board.set(Position::MiddleLeft, Square::Occupied(Player::O));
        board.set(Position::Center, Square::Occupied(Player::O));

        assert!(!is_draw(&board));
    }
}
