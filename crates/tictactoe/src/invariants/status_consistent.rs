//! Status consistency invariant: the stored status matches the board.

use super::Invariant;
use crate::rules;
use crate::types::GameState;

/// Invariant: the stored status equals the outcome recomputed from the
/// board.
///
/// The status is never mutated independently of the board, so
/// re-running [`rules::evaluate`] must reproduce it exactly.
pub struct StatusConsistentInvariant;

impl Invariant<GameState> for StatusConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        rules::evaluate(state.board()) == *state.status()
    }

    fn description() -> &'static str {
        "The stored status equals the outcome recomputed from the board"
    }
}
