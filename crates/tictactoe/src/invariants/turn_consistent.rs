//! Turn consistency invariant: the player to move matches the marks.

use super::{mark_count, Invariant};
use crate::types::{GameState, GameStatus, Player};

/// Invariant: while the game is in progress, the player to move is
/// determined by the mark counts.
///
/// X moves first, so X is to move iff both players have placed the
/// same number of marks. Once the game is over the stored turn is
/// frozen and carries no meaning, so terminal states always pass.
pub struct TurnConsistentInvariant;

impl Invariant<GameState> for TurnConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        if state.status() != &GameStatus::InProgress {
            return true;
        }

        let x = mark_count(state.board(), Player::X);
        let o = mark_count(state.board(), Player::O);
        let expected = if x == o { Player::X } else { Player::O };
        state.current_player() == expected
    }

    fn description() -> &'static str {
        "The player to move is X iff mark counts are equal (while in progress)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Game;

    #[test]
    fn test_new_game_holds() {
        assert!(TurnConsistentInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_alternation_tracked() {
        let mut game = Game::new();
        game.make_move(4).unwrap();
        assert_eq!(game.state().current_player(), Player::O);
        assert!(TurnConsistentInvariant::holds(game.state()));

        game.make_move(0).unwrap();
        assert_eq!(game.state().current_player(), Player::X);
        assert!(TurnConsistentInvariant::holds(game.state()));
    }

    #[test]
    fn test_terminal_state_passes() {
        let mut game = Game::new();
        // X wins the top row; turn freezes on X
        for index in [0, 3, 1, 4, 2] {
            game.make_move(index).unwrap();
        }
        assert!(TurnConsistentInvariant::holds(game.state()));
    }
}
