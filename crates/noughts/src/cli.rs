//! Command-line interface for noughts.

use clap::{Parser, Subcommand};
use noughts_core::Theme;
use std::path::PathBuf;

/// Noughts - tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it is missing)
    #[arg(short, long, default_value = "noughts.toml", global = true)]
    pub config: PathBuf,

    /// Starting theme, overriding the config file (light or dark)
    #[arg(long, global = true)]
    pub theme: Option<Theme>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    Play,

    /// Apply cell indices (0-8) to a fresh game and print the result
    Replay {
        /// Print the final state as JSON
        #[arg(long)]
        json: bool,

        /// Cell indices in play order; invalid moves are ignored
        moves: Vec<usize>,
    },
}
