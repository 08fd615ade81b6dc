//! Move validation errors.

use super::Position;

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    OccupiedSquare(Position),

    /// The input does not name a key between 1 and 9.
    #[display("{:?} is not a board position (expected 1-9)", _0)]
    InvalidKey(String),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}
