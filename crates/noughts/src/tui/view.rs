//! View model: a pure projection of the session for rendering.

use derive_getters::Getters;
use noughts_core::{GameState, Outcome, Player, Position, Session, Theme};
use tracing::instrument;

/// Rendering knobs that do not come from game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewOptions {
    /// Show 1-9 hints in empty cells.
    pub show_cell_numbers: bool,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            show_cell_numbers: true,
        }
    }
}

/// One cell as it should be drawn.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct CellView {
    position: Position,
    mark: Option<Player>,
    highlighted: bool,
    text: String,
}

/// Everything the renderer needs, derived from a [`Session`].
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct BoardView {
    cells: [CellView; 9],
    status: String,
    theme: Theme,
    game_over: bool,
}

/// Status line for a game: next player, winner, or draw.
#[instrument(skip(game))]
pub fn status_line(game: &GameState) -> String {
    match game.outcome() {
        Outcome::InProgress => format!("Next player: {}", game.to_move()),
        Outcome::Won { player, .. } => format!("Winner: {}", player),
        Outcome::Draw => "Draw".to_string(),
    }
}

/// Builds the view model for `session`.
#[instrument(skip(session))]
pub fn build(session: &Session, options: &ViewOptions) -> BoardView {
    let game = session.game();
    let line = game.outcome().line();

    let cells = Position::ALL.map(|position| {
        let mark = game.board().get(position).player();
        let text = match mark {
            Some(player) => player.to_string(),
            None if options.show_cell_numbers => (position.to_index() + 1).to_string(),
            None => String::new(),
        };
        CellView {
            position,
            mark,
            highlighted: line.is_some_and(|l| l.contains(position)),
            text,
        }
    });

    BoardView {
        cells,
        status: status_line(game),
        theme: session.theme(),
        game_over: game.is_over(),
    }
}
