//! Console tic-tac-toe: a human plays the computer in best-of series.
//!
//! # Architecture
//!
//! - **Console**: line-based prompts with re-asking on bad input
//! - **Display**: score, marks, board and result screens
//! - **Orchestrator**: the series loop driving [`tictactoe_core::Game`]
//! - **Config**: TOML file plus command-line overrides
//!
//! # Example
//!
//! ```no_run
//! use std::io;
//! use tictactoe_core::Game;
//! use tictactoe_series::{Console, Orchestrator};
//!
//! # fn example() -> Result<(), tictactoe_series::PlayError> {
//! let console = Console::new(io::stdin().lock(), io::stdout(), true);
//! let mut orchestrator = Orchestrator::new(Game::new(), console, rand::rng());
//! orchestrator.run()?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod console;
pub mod display;
mod error;
mod orchestrator;

pub use cli::Cli;
pub use config::{ConfigError, SeriesConfig};
pub use console::{Console, parse_difficulty, parse_move, parse_yes_no};
pub use error::PlayError;
pub use orchestrator::Orchestrator;
