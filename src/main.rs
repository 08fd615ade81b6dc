//! Tic-tac-toe series on the console.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use std::io;
use std::path::Path;
use tictactoe_core::Game;
use tictactoe_series::{Cli, Console, Orchestrator, SeriesConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_file.as_deref())?;

    let config = match &cli.config {
        Some(path) => SeriesConfig::from_file(path)?,
        None => SeriesConfig::default(),
    }
    .with_overrides(cli.points_target, cli.no_clear);
    config.validate()?;
    info!(?config, "Configuration resolved");

    let console = Console::new(io::stdin().lock(), io::stdout().lock(), *config.clear_screen());
    let game = Game::with_points_target(*config.points_target());
    let mut orchestrator = Orchestrator::new(game, console, rand::rng());
    orchestrator.run()?;

    Ok(())
}

/// Logs go to stderr, or to `log_file` so they never interleave with the board.
fn init_tracing(log_file: Option<&Path>) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    match log_file {
        Some(path) => {
            let file = std::fs::File::create(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::sync::Arc::new(file))
                .with_ansi(false)
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::stderr)
                .init();
        }
    }

    Ok(())
}
