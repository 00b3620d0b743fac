//! Application state: one game engine plus the derived status line.

use tictactoe::{Game, GameState, GameStatus};
use tracing::debug;

/// Main application state.
pub struct App {
    game: Game,
    status: String,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new() -> Self {
        let game = Game::new();
        let status = status_line(game.state());
        Self { game, status }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Gets the current status line.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Submits a move at the given cell index (0-8).
    ///
    /// Rejections (occupied cell, game over) are routine; they are
    /// logged and the display is left as-is.
    pub fn select_cell(&mut self, index: usize) {
        match self.game.make_move(index) {
            Ok(state) => {
                self.status = status_line(state);
            }
            Err(reason) => {
                debug!(index, %reason, "Move rejected");
            }
        }
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        let state = self.game.reset();
        self.status = status_line(state);
    }
}

/// Derives the status line from the game state.
fn status_line(state: &GameState) -> String {
    match state.status() {
        GameStatus::InProgress => format!("{} to play", state.current_player()),
        GameStatus::Won(player) => format!("Winner: {player}"),
        GameStatus::Draw => "It's a tie!".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_follows_turns() {
        let mut app = App::new();
        assert_eq!(app.status(), "X to play");

        app.select_cell(4);
        assert_eq!(app.status(), "O to play");
    }

    #[test]
    fn rejection_leaves_status_unchanged() {
        let mut app = App::new();
        app.select_cell(4);
        app.select_cell(4);
        assert_eq!(app.status(), "O to play");
    }

    #[test]
    fn win_and_restart() {
        let mut app = App::new();
        for index in [0, 3, 1, 4, 2] {
            app.select_cell(index);
        }
        assert_eq!(app.status(), "Winner: X");
        assert!(app.game().state().status().is_over());

        app.restart();
        assert_eq!(app.status(), "X to play");
        assert!(!app.game().state().status().is_over());
    }

    #[test]
    fn tie_message() {
        let mut app = App::new();
        for index in [0, 2, 1, 3, 5, 4, 6, 7, 8] {
            app.select_cell(index);
        }
        assert_eq!(app.status(), "It's a tie!");
    }
}
