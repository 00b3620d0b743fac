//! Game engine: move validation, turn alternation, outcome tracking.

use crate::invariants::{GameInvariants, InvariantSet};
use crate::position::Position;
use crate::rules;
use crate::types::{GameState, GameStatus};
use tracing::instrument;

/// Error returned when a move is rejected.
///
/// Rejections are routine, non-fatal outcomes: the game state is left
/// untouched and the caller is free to ignore them.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// The index is outside the board (must be 0-8).
    #[display("Index {_0} is out of bounds (must be 0-8)")]
    OutOfBounds(usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0.label())]
    SquareOccupied(Position),
}

impl std::error::Error for MoveError {}

/// Tic-tac-toe game engine.
///
/// Owns one [`GameState`] for the lifetime of a session. Callers read
/// snapshots through [`state`](Game::state) and submit moves through
/// [`make_move`](Game::make_move); [`reset`](Game::reset) replaces the
/// state wholesale with the initial configuration.
#[derive(Debug, Clone, Default)]
pub struct Game {
    state: GameState,
}

impl Game {
    /// Creates a new game: empty board, X to move.
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Makes a move at the given cell index (0-8, row-major).
    ///
    /// On success the mark is placed for the player to move, the status
    /// is recomputed from the board, and the turn passes to the other
    /// player unless the game just ended. Returns the updated state.
    ///
    /// # Errors
    ///
    /// Checked in order:
    /// - [`MoveError::GameOver`] if the outcome is already decided;
    /// - [`MoveError::OutOfBounds`] if `index` is not in `0..9`;
    /// - [`MoveError::SquareOccupied`] if the cell is already marked.
    #[instrument(skip(self), fields(player = %self.state.current_player()))]
    pub fn make_move(&mut self, index: usize) -> Result<&GameState, MoveError> {
        if self.state.status().is_over() {
            return Err(MoveError::GameOver);
        }

        let pos = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;

        if !self.state.board().is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        self.state.place(pos);
        self.state.set_status(rules::evaluate(self.state.board()));
        if self.state.status() == &GameStatus::InProgress {
            self.state.flip_turn();
        }

        debug_assert!(
            GameInvariants::check_all(&self.state).is_ok(),
            "game invariants violated after move"
        );

        Ok(&self.state)
    }

    /// Resets to the initial configuration. Always succeeds.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> &GameState {
        self.state = GameState::new();
        &self.state
    }
}
