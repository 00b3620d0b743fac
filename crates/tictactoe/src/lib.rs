//! Pure tic-tac-toe game logic.
//!
//! The engine is a small state machine over a 3x3 board:
//!
//! - **[`Game`]** owns one [`GameState`] and enforces move legality,
//!   turn alternation, and terminal-state detection.
//! - **[`rules`]** holds the pure outcome functions (win, draw) that the
//!   engine recomputes after every accepted move.
//! - **[`invariants`]** expresses the state-machine guarantees as
//!   first-class, independently testable properties.
//!
//! Illegal moves are routine, typed rejections ([`MoveError`]), never
//! panics; a rejected move leaves the state untouched.
//!
//! # Example
//!
//! ```
//! use tictactoe::{Game, GameStatus, Player};
//!
//! let mut game = Game::new();
//! let state = game.make_move(4).expect("center is free");
//! assert_eq!(state.current_player(), Player::O);
//! assert_eq!(state.status(), &GameStatus::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
pub mod invariants;
mod position;
pub mod rules;
mod types;

pub use engine::{Game, MoveError};
pub use position::Position;
pub use types::{Board, GameState, GameStatus, Player, Square};
