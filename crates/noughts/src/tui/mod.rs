//! Terminal UI for noughts.

mod app;
pub mod input;
pub mod ui;
pub mod view;

pub use app::App;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{error, info, instrument};

use crate::config::AppConfig;
use view::ViewOptions;

/// Runs the TUI until the user quits.
///
/// The terminal is restored before any error is returned.
#[instrument(skip(config), fields(theme = %config.theme()))]
pub fn run_tui(config: &AppConfig) -> Result<()> {
    info!("Starting noughts TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let options = ViewOptions {
        show_cell_numbers: *config.show_cell_numbers(),
    };
    let mut app = App::new(*config.theme(), options);
    let res = app.run(&mut terminal);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(outcome = %app.session().game().outcome(), "TUI exited");

    res
}
