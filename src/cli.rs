//! Command-line interface for tictactoe_series.

use clap::Parser;
use std::path::PathBuf;

/// Play tic-tac-toe against the computer, first to N wins takes the series
#[derive(Parser, Debug)]
#[command(name = "tictactoe_series")]
#[command(about = "Human vs. computer tic-tac-toe series", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Games needed to win the series (overrides the config file)
    #[arg(long)]
    pub points_target: Option<u32>,

    /// Scroll instead of clearing the screen between moves
    #[arg(long)]
    pub no_clear: bool,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
