//! Mark balance invariant: X leads O by at most one mark.

use super::{mark_count, Invariant};
use crate::types::{GameState, Player};

/// Invariant: mark counts stay balanced.
///
/// X moves first and turns alternate, so on every reachable board
/// `count(X) == count(O)` or `count(X) == count(O) + 1`.
pub struct MarkBalanceInvariant;

impl Invariant<GameState> for MarkBalanceInvariant {
    fn holds(state: &GameState) -> bool {
        let x = mark_count(state.board(), Player::X);
        let o = mark_count(state.board(), Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X has the same number of marks as O, or exactly one more"
    }
}
