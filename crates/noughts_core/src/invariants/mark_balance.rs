//! Mark balance invariant: turns strictly alternate starting with X.

use super::Invariant;
use crate::{GameState, Player};

/// Invariant: X has made as many moves as O, or exactly one more.
///
/// X moves next exactly when the counts are equal, so the turn flag
/// alternates X, O, X, O, ... across accepted moves.
pub struct MarkBalanceInvariant;

impl Invariant<GameState> for MarkBalanceInvariant {
    fn holds(game: &GameState) -> bool {
        let x = game.board().count(Player::X);
        let o = game.board().count(Player::O);

        match game.to_move() {
            Player::X => x == o,
            Player::O => x == o + 1,
        }
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
