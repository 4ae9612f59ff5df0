//! Session-scoped state holder and the presentation event boundary.

use tracing::{debug, instrument};

use crate::{GameState, Theme};

/// An input event emitted by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UiEvent {
    /// Request a move at a cell index. Not range-checked here.
    Move(usize),
    /// Start a fresh game.
    Reset,
    /// Switch between light and dark themes.
    ToggleTheme,
}

/// Owns the single game and the theme for one run of the program.
#[derive(Debug, Clone, Default)]
pub struct Session {
    game: GameState,
    theme: Theme,
}

impl Session {
    /// Creates a session with a fresh game and the given theme.
    #[instrument]
    pub fn new(theme: Theme) -> Self {
        Self {
            game: GameState::new(),
            theme,
        }
    }

    /// Returns the game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Returns the current theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Forwards an event to the game or the theme without interpreting it.
    #[instrument(skip(self))]
    pub fn handle(&mut self, event: UiEvent) {
        debug!(?event, "Handling UI event");
        match event {
            UiEvent::Move(index) => self.game.apply_move(index),
            UiEvent::Reset => self.game.reset(),
            UiEvent::ToggleTheme => self.theme = self.theme.toggle(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    #[test]
    fn test_theme_toggle_does_not_touch_game() {
        let mut session = Session::new(Theme::Light);
        session.handle(UiEvent::Move(0));
        let game = session.game().clone();

        session.handle(UiEvent::ToggleTheme);
        assert_eq!(session.theme(), Theme::Dark);
        assert_eq!(session.game(), &game);
    }

    #[test]
    fn test_reset_keeps_theme() {
        let mut session = Session::new(Theme::Dark);
        session.handle(UiEvent::Move(0));
        session.handle(UiEvent::Reset);
        assert_eq!(session.theme(), Theme::Dark);
        assert_eq!(session.game().to_move(), Player::X);
        assert_eq!(session.game().board().count(Player::X), 0);
    }
}
