//! Noughts core - pure tic-tac-toe game logic.
//!
//! # Architecture
//!
//! - **Types**: board, squares, players, positions
//! - **Rules**: pure win/draw detection over a board
//! - **Game**: the mutable [`GameState`] with its move and reset transitions
//! - **Contracts**: pre/postconditions and invariants checked on every move
//! - **Session**: the single state holder fed by presentation events
//!
//! # Example
//!
//! ```
//! use noughts_core::{GameState, Outcome, Player};
//!
//! let mut game = GameState::new();
//! for index in [0, 4, 1, 5, 2] {
//!     game.apply_move(index);
//! }
//! assert!(matches!(game.outcome(), Outcome::Won { player: Player::X, .. }));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod contracts;
mod game;
pub mod invariants;
mod outcome;
mod position;
pub mod rules;
mod session;
mod theme;
mod types;

pub use action::{Move, MoveError};
pub use game::GameState;
pub use outcome::{Line, Outcome};
pub use position::Position;
pub use rules::compute_outcome;
pub use session::{Session, UiEvent};
pub use theme::Theme;
pub use types::{Board, Player, Square};
