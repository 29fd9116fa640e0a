//! Noughts - CLI entry point.

use anyhow::{Context, Result};
use clap::Parser;
use noughts::{Cli, Command, Config, LoggingConfig, replay, run_tui};
use noughts_rules::Position;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::load_or_default(&cli.config)?;

    match cli.command.unwrap_or(Command::Tui) {
        Command::Tui => {
            initialize_file_tracing(config.logging())?;
            run_tui(config.theme().palette()?)
        }
        Command::Replay { moves } => {
            initialize_stderr_tracing();
            run_replay(&moves);
            Ok(())
        }
    }
}

/// Replays indices already range-checked by the argument parser.
#[instrument]
fn run_replay(moves: &[u8]) {
    let positions: Vec<Position> = moves
        .iter()
        .filter_map(|index| Position::from_index(usize::from(*index)))
        .collect();
    let report = replay(&positions);
    println!("{}", report);
}

/// Sends logs to the configured file so they never touch the terminal UI.
fn initialize_file_tracing(logging: &LoggingConfig) -> Result<()> {
    let log_file = std::fs::File::create(logging.file())
        .with_context(|| format!("Failed to create log file {}", logging.file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(logging.filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    info!(file = %logging.file().display(), "Tracing initialized");
    Ok(())
}

fn initialize_stderr_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}
