//! Tests for game state serialization.
//!
//! Frontends consume state snapshots as JSON, so the wire shape of the
//! core types is part of the public surface.

use tictactoe::{Game, GameState, GameStatus, Player};

#[test]
fn test_initial_state_json_shape() {
    let state = GameState::new();
    let json = serde_json::to_value(&state).unwrap();

    assert_eq!(json["to_move"], "X");
    assert_eq!(json["status"], "InProgress");
    assert_eq!(json["board"]["squares"].as_array().unwrap().len(), 9);
    assert_eq!(json["board"]["squares"][0], "Empty");
}

#[test]
fn test_won_state_survives_json() {
    let mut game = Game::new();
    for index in [0, 3, 1, 4, 2] {
        game.make_move(index).unwrap();
    }

    let json = serde_json::to_string(game.state()).unwrap();
    let restored: GameState = serde_json::from_str(&json).unwrap();

    assert_eq!(&restored, game.state());
    assert_eq!(restored.status(), &GameStatus::Won(Player::X));
}
