//! Outcome consistency invariant: the cached outcome matches the board.

use super::Invariant;
use crate::{GameState, compute_outcome};

/// Invariant: the stored outcome equals `compute_outcome(board)`.
pub struct OutcomeConsistentInvariant;

impl Invariant<GameState> for OutcomeConsistentInvariant {
    fn holds(game: &GameState) -> bool {
        *game.outcome() == compute_outcome(game.board())
    }

    fn description() -> &'static str {
        "Outcome is derived from the current board"
    }
}
