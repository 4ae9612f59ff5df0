//! Application state and the event loop.

use crossterm::event::{self, Event, KeyEventKind};
use noughts_core::{Position, Session, Theme, UiEvent};
use ratatui::{Terminal, backend::Backend, layout::Rect};
use tracing::{debug, info, instrument};

use super::input::{self, Action};
use super::ui;
use super::view::{self, ViewOptions};

/// Main application state: the session plus presentation-only state.
#[derive(Debug)]
pub struct App {
    session: Session,
    cursor: Position,
    options: ViewOptions,
    screen: Rect,
}

impl App {
    /// Creates a new application.
    #[instrument]
    pub fn new(theme: Theme, options: ViewOptions) -> Self {
        Self {
            session: Session::new(theme),
            cursor: Position::Center,
            options,
            screen: Rect::default(),
        }
    }

    /// Returns the session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Returns the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Applies an action. Returns `false` when the app should quit.
    #[instrument(skip(self))]
    pub fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::Dispatch(event) => {
                if let UiEvent::Move(index) = event
                    && let Some(pos) = Position::from_index(index)
                {
                    self.cursor = pos;
                }
                self.session.handle(event);
            }
            Action::Cursor(pos) => self.cursor = pos,
            Action::Quit => {
                info!("User quit");
                return false;
            }
            Action::Ignore => {}
        }
        true
    }

    /// Maps a terminal event to an action against the last drawn screen.
    #[instrument(skip(self))]
    pub fn action_for(&self, event: Event) -> Action {
        match event {
            // Skip key release events (crossterm fires both press and release).
            Event::Key(key) if key.kind != KeyEventKind::Release => input::map_key(key, self.cursor),
            Event::Mouse(mouse) => input::map_mouse(mouse, &ui::cell_areas(self.screen)),
            _ => Action::Ignore,
        }
    }

    /// Runs the event loop until the user quits.
    ///
    /// Each iteration draws the current state, then blocks for one event and
    /// handles it completely before drawing again.
    #[instrument(skip(self, terminal))]
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()>
    where
        <B as Backend>::Error: Send + Sync + 'static,
    {
        info!("Starting game loop");

        loop {
            let view = view::build(&self.session, &self.options);
            let cursor = self.cursor;
            let mut screen = self.screen;
            terminal.draw(|f| {
                screen = f.area();
                ui::draw(f, &view, cursor);
            })?;
            self.screen = screen;

            let event = event::read()?;
            let action = self.action_for(event);
            debug!(?action, "Input mapped");
            if !self.apply(action) {
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
    use noughts_core::Player;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn app() -> App {
        let mut app = App::new(Theme::Light, ViewOptions::default());
        app.screen = Rect::new(0, 0, 60, 24);
        app
    }

    fn feed(app: &mut App, events: Vec<Event>) {
        for event in events {
            let action = app.action_for(event);
            assert!(app.apply(action));
        }
    }

    #[test]
    fn test_keyboard_game_to_win() {
        let mut app = app();
        let keys = ['1', '5', '2', '6', '3'].map(|c| press(KeyCode::Char(c)));
        feed(&mut app, keys.to_vec());

        let outcome = app.session().game().outcome();
        assert_eq!(outcome.winner(), Some(Player::X));
        assert_eq!(app.cursor(), Position::TopRight);
    }

    #[test]
    fn test_cursor_and_enter() {
        let mut app = app();
        feed(&mut app, vec![press(KeyCode::Up), press(KeyCode::Left), press(KeyCode::Enter)]);
        assert_eq!(
            app.session().game().board().get(Position::TopLeft).player(),
            Some(Player::X)
        );
    }

    #[test]
    fn test_click_places_mark() {
        let mut app = app();
        let target = ui::cell_areas(app.screen)[8];
        let click = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: target.x + 1,
            row: target.y + 1,
            modifiers: KeyModifiers::NONE,
        });
        feed(&mut app, vec![click]);
        assert_eq!(
            app.session().game().board().get(Position::BottomRight).player(),
            Some(Player::X)
        );
    }

    #[test]
    fn test_theme_and_reset_keys() {
        let mut app = app();
        feed(&mut app, vec![press(KeyCode::Char('5')), press(KeyCode::Char('t')), press(KeyCode::Char('r'))]);
        assert_eq!(app.session().theme(), Theme::Dark);
        assert!(app.session().game().board().squares().iter().all(|s| s.player().is_none()));
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        let action = app.action_for(press(KeyCode::Char('q')));
        assert!(!app.apply(action));
    }
}
