//! Game state and its transitions.
//!
//! [`GameState`] owns the board, the turn flag and the derived outcome. The
//! outcome is a cache of [`compute_outcome`] and is rewritten only at the end
//! of an accepted move or a reset, so it can never drift from the board.

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::contracts::{Contract, InBounds, MoveContract};
use crate::{Board, Move, MoveError, Outcome, Player, Position, Square, compute_outcome};

/// Complete state of one tic-tac-toe game.
///
/// Starts with an empty board and X to move. `Won` and `Draw` are terminal:
/// moves are ignored until [`GameState::reset`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) to_move: Player,
    pub(crate) outcome: Outcome,
}

impl GameState {
    /// Creates a new game.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            outcome: Outcome::InProgress,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player who moves next.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the outcome derived from the current board.
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Returns true once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Returns the empty squares, or nothing once the game is over.
    #[instrument(skip(self))]
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.is_over() {
            Vec::new()
        } else {
            Position::valid_moves(&self.board)
        }
    }

    /// Places the current player's mark at `index` (0-8).
    ///
    /// Invalid moves are no-ops: an index off the board, an occupied square,
    /// or a finished game leave the state untouched.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn apply_move(&mut self, index: usize) {
        match self.try_move(index) {
            Ok(_) => {}
            Err(MoveError::InvariantViolation(reason)) => {
                warn!(index, %reason, "Move broke a game invariant");
            }
            Err(e) => debug!(index, error = %e, "Move ignored"),
        }
    }

    /// Places the current player's mark at `index`, reporting rejections.
    ///
    /// On success the turn passes to the opponent and the outcome is
    /// recomputed. Postconditions are verified in debug builds.
    ///
    /// # Errors
    ///
    /// - [`MoveError::OutOfBounds`] if `index` is not 0-8
    /// - [`MoveError::GameOver`] if the game is already won or drawn
    /// - [`MoveError::SquareOccupied`] if the square is taken
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn try_move(&mut self, index: usize) -> Result<Move, MoveError> {
        let position = InBounds::check(index)?;
        let action = Move::new(self.to_move, position);
        MoveContract::pre(self, &action)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        self.board.set(position, Square::Occupied(action.player));
        self.to_move = action.player.opponent();
        self.refresh_outcome();

        #[cfg(debug_assertions)]
        MoveContract::post(&before, self)?;

        info!(%action, outcome = %self.outcome, "Move applied");
        Ok(action)
    }

    /// Restores the initial state: empty board, X to move, in progress.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.to_move = Player::X;
        self.refresh_outcome();
        info!("Game reset");
    }

    fn refresh_outcome(&mut self) {
        self.outcome = compute_outcome(&self.board);
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
