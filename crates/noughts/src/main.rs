//! Noughts - tic-tac-toe in the terminal.

use anyhow::{Context, Result};
use clap::Parser;
use noughts::{AppConfig, Cli, Command, replay, run_tui};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)?;
    if let Some(theme) = cli.theme {
        config = config.with_theme(theme);
    }

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => {
            initialize_file_tracing(&config)?;
            run_tui(&config)
        }
        Command::Replay { json, moves } => {
            initialize_stderr_tracing(&config);
            run_replay(&moves, json)
        }
    }
}

/// Prints the result of a replayed move list.
#[instrument]
fn run_replay(moves: &[usize], json: bool) -> Result<()> {
    let game = replay::replay(moves);
    let output = if json {
        replay::render_json(&game)?
    } else {
        replay::render_text(&game)
    };
    println!("{}", output);
    Ok(())
}

fn env_filter(config: &AppConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()))
}

/// Sends tracing output to the configured log file so it never touches the TUI.
fn initialize_file_tracing(config: &AppConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(log_file = %config.log_file().display(), "Tracing initialized");
    Ok(())
}

fn initialize_stderr_tracing(config: &AppConfig) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr)
        .try_init();
}
