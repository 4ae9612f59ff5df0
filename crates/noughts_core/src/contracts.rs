//! Contract-based validation for tic-tac-toe moves.
//!
//! Contracts formalize Hoare-style reasoning: {P} action {Q}. Preconditions
//! decide whether a move is accepted at all; postconditions verify that an
//! accepted move left the game in a consistent state.

use crate::invariants::{GameInvariants, InvariantSet};
use crate::{GameState, Move, MoveError, Position, Square};
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the index names a square on the board.
pub struct InBounds;

impl InBounds {
    /// Resolves `index` to a position.
    #[instrument]
    pub fn check(index: usize) -> Result<Position, MoveError> {
        Position::from_index(index).ok_or(MoveError::OutOfBounds(index))
    }
}

/// Precondition: the game has not been won or drawn.
pub struct GameNotOver;

impl GameNotOver {
    /// Fails with [`MoveError::GameOver`] once the game is won or drawn.
    #[instrument(skip(game))]
    pub fn check(game: &GameState) -> Result<(), MoveError> {
        if game.is_over() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Fails with [`MoveError::SquareOccupied`] if the square is taken.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameState) -> Result<(), MoveError> {
        if game.board().is_empty(mov.position) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied(mov.position))
        }
    }
}

/// Composite precondition: the game is live and the square is free.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameState) -> Result<(), MoveError> {
        GameNotOver::check(game)?;
        SquareIsEmpty::check(mov, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Postconditions
// ─────────────────────────────────────────────────────────────

/// Postcondition: exactly one empty square was filled, by the mover, and
/// nothing else changed.
pub struct MonotonicBoard;

impl MonotonicBoard {
    /// Compares the boards before and after a single move.
    #[instrument(skip(before, after))]
    pub fn holds(before: &GameState, after: &GameState) -> bool {
        let mut filled = 0;
        for (old, new) in before
            .board()
            .squares()
            .iter()
            .zip(after.board().squares())
        {
            match (old, new) {
                (Square::Empty, Square::Occupied(player)) if *player == before.to_move() => {
                    filled += 1
                }
                (old, new) if old == new => {}
                _ => {
                    warn!(?old, ?new, "Square changed illegally");
                    return false;
                }
            }
        }
        filled == 1
    }
}

/// Contract for move actions.
///
/// Preconditions:
/// - Game is still in progress
/// - Square must be empty
///
/// Postconditions:
/// - Board changed monotonically by one mark
/// - Marks stay balanced and the outcome matches the board
pub struct MoveContract;

impl Contract<GameState, Move> for MoveContract {
    fn pre(game: &GameState, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, game)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), MoveError> {
        if !MonotonicBoard::holds(before, after) {
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: board changed non-monotonically".to_string(),
            ));
        }

        GameInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    #[test]
    fn test_precondition_empty_square() {
        let game = GameState::new();
        let action = Move::new(Player::X, Position::Center);
        assert!(MoveContract::pre(&game, &action).is_ok());
    }

    #[test]
    fn test_precondition_occupied_square() {
        let mut game = GameState::new();
        game.apply_move(4);
        let action = Move::new(Player::O, Position::Center);
        assert_eq!(
            MoveContract::pre(&game, &action),
            Err(MoveError::SquareOccupied(Position::Center))
        );
    }

    #[test]
    fn test_precondition_game_over_checked_first() {
        let mut game = GameState::new();
        for index in [0, 4, 1, 5, 2] {
            game.apply_move(index);
        }
        // Occupied and over: the game-over reason wins.
        let action = Move::new(Player::O, Position::Center);
        assert_eq!(MoveContract::pre(&game, &action), Err(MoveError::GameOver));
    }

    #[test]
    fn test_in_bounds() {
        assert_eq!(InBounds::check(8), Ok(Position::BottomRight));
        assert_eq!(InBounds::check(9), Err(MoveError::OutOfBounds(9)));
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = GameState::new();
        let mut after = before.clone();
        after.apply_move(4);
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_overwrite() {
        let mut before = GameState::new();
        before.apply_move(4);
        let mut after = before.clone();
        after.apply_move(0);
        after.board.set(Position::Center, Square::Occupied(Player::O));
        assert!(matches!(
            MoveContract::post(&before, &after),
            Err(MoveError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_postcondition_detects_wrong_mark() {
        let before = GameState::new();
        let mut after = before.clone();
        after.board.set(Position::Center, Square::Occupied(Player::O));
        assert!(!MonotonicBoard::holds(&before, &after));
    }
}
