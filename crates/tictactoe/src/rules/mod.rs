//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating game state
//! according to tic-tac-toe rules. The outcome is always a function of
//! the board alone, so it can be recomputed idempotently at any time.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::check_winner;

use crate::types::{Board, GameStatus};

/// Computes the outcome for a board.
///
/// Returns `Won` if a line is complete, `Draw` if the board is full
/// with no winner, `InProgress` otherwise.
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some(winner) = check_winner(board) {
        GameStatus::Won(winner)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
