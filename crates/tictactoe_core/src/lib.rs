//! Pure tic-tac-toe logic for a human vs. computer series.
//!
//! # Architecture
//!
//! - **Types**: [`Marker`], [`Square`] and [`Player`]
//! - **Board**: the 3x3 grid keyed by [`Position`] (keys 1-9)
//! - **Rules**: win detection, full-board detection and two-in-a-row
//!   lookups over [`WINNING_LINES`]
//! - **Strategy**: the computer's move policy
//! - **Game**: turn order and series scoring
//!
//! Nothing here reads or writes the terminal; the console front end
//! drives [`Game`] one move at a time.
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Difficulty, Game, Marker, Position};
//!
//! let mut game = Game::new();
//! game.configure_series(Marker::Human, Difficulty::Difficult);
//! game.current_player_moves(Position::TopLeft)?;
//!
//! let mut rng = rand::rng();
//! let reply = game.computer_key(&mut rng).expect("board has room");
//! assert_eq!(reply, Position::Center);
//! # Ok::<(), tictactoe_core::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod game;
mod join;
mod position;
pub mod rules;
pub mod strategy;
mod types;

pub use action::MoveError;
pub use board::Board;
pub use game::{Game, GameOutcome, POINTS_TARGET};
pub use join::{join_or, join_or_default};
pub use position::Position;
pub use rules::WINNING_LINES;
pub use strategy::{Difficulty, Reason};
pub use types::{Marker, Player, Square};
