//! Noughts - tic-tac-toe in the terminal.
//!
//! # Architecture
//!
//! - **Core**: game rules and state live in [`noughts_core`]
//! - **TUI**: a pure view model, ratatui rendering and crossterm input
//! - **Replay**: headless evaluation of a move list
//! - **Config**: TOML startup settings and the command line

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod replay;
pub mod tui;

pub use cli::{Cli, Command};
pub use config::{AppConfig, ConfigError};
pub use tui::{App, run_tui};
