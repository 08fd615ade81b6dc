//! Board keys for tic-tac-toe moves.

use super::action::MoveError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A position on the tic-tac-toe board.
///
/// Positions are numbered 1-9 in row-major order, the same numbers the
/// player types at the move prompt.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (key 1)
    TopLeft,
    /// Top-center (key 2)
    TopCenter,
    /// Top-right (key 3)
    TopRight,
    /// Middle-left (key 4)
    MiddleLeft,
    /// Center (key 5)
    Center,
    /// Middle-right (key 6)
    MiddleRight,
    /// Bottom-left (key 7)
    BottomLeft,
    /// Bottom-center (key 8)
    BottomCenter,
    /// Bottom-right (key 9)
    BottomRight,
}

impl Position {
    /// All 9 positions, in ascending key order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Returns the key (1-9) the player types for this position.
    pub fn key(self) -> u8 {
        self.index() as u8 + 1
    }

    /// Converts position to board index (0-8).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Creates position from its key (1-9).
    pub fn from_key(key: u8) -> Option<Self> {
        match key {
            1..=9 => Some(Self::ALL[usize::from(key - 1)]),
            _ => None,
        }
    }

    /// Parses a typed key such as `" 7\n"`.
    #[instrument]
    pub fn parse_key(input: &str) -> Result<Self, MoveError> {
        input
            .trim()
            .parse::<u8>()
            .ok()
            .and_then(Self::from_key)
            .ok_or_else(|| MoveError::InvalidKey(input.trim().to_string()))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}
