//! Keyboard and mouse mapping to UI actions.
//!
//! Mapping never consults game rules: a move request is forwarded as-is and
//! the core decides whether it is a no-op.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use noughts_core::{Position, UiEvent};
use ratatui::layout::Rect;
use tracing::instrument;

/// What the application should do in response to an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Forward an event to the session.
    Dispatch(UiEvent),
    /// Move the keyboard cursor.
    Cursor(Position),
    /// Leave the application.
    Quit,
    /// Nothing to do.
    Ignore,
}

/// Maps a key press to an action, given the current cursor.
#[instrument]
pub fn map_key(key: KeyEvent, cursor: Position) -> Action {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('r') | KeyCode::Char('R') => Action::Dispatch(UiEvent::Reset),
        KeyCode::Char('t') | KeyCode::Char('T') => Action::Dispatch(UiEvent::ToggleTheme),
        KeyCode::Char(c @ '1'..='9') => {
            let digit = c as usize - '1' as usize;
            Action::Dispatch(UiEvent::Move(digit))
        }
        KeyCode::Enter | KeyCode::Char(' ') => Action::Dispatch(UiEvent::Move(cursor.to_index())),
        code @ (KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right) => {
            Action::Cursor(move_cursor(cursor, code))
        }
        _ => Action::Ignore,
    }
}

/// Maps a mouse event to a move on the clicked cell.
///
/// `cells` are the on-screen cell rectangles in index order, as produced by
/// [`cell_areas`](super::ui::cell_areas).
#[instrument(skip(cells))]
pub fn map_mouse(event: MouseEvent, cells: &[Rect; 9]) -> Action {
    if event.kind != MouseEventKind::Down(MouseButton::Left) {
        return Action::Ignore;
    }

    cells
        .iter()
        .position(|r| {
            event.column >= r.x
                && event.column < r.x + r.width
                && event.row >= r.y
                && event.row < r.y + r.height
        })
        .map_or(Action::Ignore, |index| Action::Dispatch(UiEvent::Move(index)))
}

/// Moves cursor based on arrow keys, stopping at the board edges.
#[instrument]
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Up => row.checked_sub(1).map(|r| (r, col)),
        KeyCode::Down => Some((row + 1, col)),
        KeyCode::Left => col.checked_sub(1).map(|c| (row, c)),
        KeyCode::Right => Some((row, col + 1)),
        _ => None,
    };

    target
        .and_then(|(r, c)| Position::from_row_col(r, c))
        .unwrap_or(cursor)
}
