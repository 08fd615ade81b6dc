//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board. Rules are
//! separated from board storage so the computer policy and the series
//! state machine can share them.

pub mod draw;
pub mod lines;
pub mod tactics;
pub mod win;

pub use draw::is_full;
pub use lines::WINNING_LINES;
pub use tactics::high_value_key;
pub use win::winning_marker;
