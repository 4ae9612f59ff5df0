//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating a board. Rules are separated from board
//! storage so the game state and the invariants can share them.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, winning_line};

use crate::{Board, Outcome};
use tracing::instrument;

/// Computes the outcome of `board`.
///
/// Total and deterministic. A completed line wins; if several lines are
/// complete the earliest in [`LINES`] is reported. Otherwise a full board is
/// a draw and anything else is still in progress.
#[instrument(skip(board))]
pub fn compute_outcome(board: &Board) -> Outcome {
    if let Some((player, line)) = winning_line(board) {
        return Outcome::Won { player, line };
    }

    if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
