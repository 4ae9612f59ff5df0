//! Headless replay of a move list.

use noughts_core::GameState;
use tracing::{info, instrument};

use crate::tui::view::status_line;

/// Applies `moves` to a fresh game. Invalid moves are ignored.
#[instrument]
pub fn replay(moves: &[usize]) -> GameState {
    let mut game = GameState::new();
    for index in moves {
        game.apply_move(*index);
    }
    info!(outcome = %game.outcome(), "Replay finished");
    game
}

/// Renders the board followed by the status line.
#[instrument(skip(game))]
pub fn render_text(game: &GameState) -> String {
    format!("{}\n\n{}", game.board().display(), status_line(game))
}

/// Renders the full state as pretty JSON.
#[instrument(skip(game))]
pub fn render_json(game: &GameState) -> serde_json::Result<String> {
    serde_json::to_string_pretty(game)
}
