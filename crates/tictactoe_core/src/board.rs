//! The 3x3 board.

use super::action::MoveError;
use super::rules;
use super::{Marker, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// 3x3 tic-tac-toe board keyed by [`Position`].
///
/// Every key is always present; each square is either empty or holds one
/// of the two markers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in key order (key 1 at index 0).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Clears every square.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.squares = [Square::Empty; 9];
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.index()]
    }

    /// Returns all squares in key order.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Places a marker without checking the square.
    ///
    /// Callers must only target unmarked keys; an occupied square is
    /// silently overwritten. Use [`Board::try_place`] to have it checked.
    #[instrument(skip(self))]
    pub fn place(&mut self, pos: Position, marker: Marker) {
        trace!(key = pos.key(), %marker, "Placing marker");
        self.squares[pos.index()].set_marker(marker);
    }

    /// Places a marker, refusing occupied squares.
    #[instrument(skip(self))]
    pub fn try_place(&mut self, pos: Position, marker: Marker) -> Result<(), MoveError> {
        if !self.get(pos).is_unmarked() {
            return Err(MoveError::OccupiedSquare(pos));
        }
        self.place(pos, marker);
        Ok(())
    }

    /// Checks if a square is empty.
    pub fn is_unmarked(&self, pos: Position) -> bool {
        self.get(pos).is_unmarked()
    }

    /// Returns the empty positions in ascending key order.
    pub fn unmarked_keys(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_unmarked(*pos))
            .collect()
    }

    /// Returns true once no empty square is left.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Returns the marker that completed a line, if any.
    pub fn winning_marker(&self) -> Option<Marker> {
        rules::winning_marker(self)
    }

    /// Returns true if either side has three in a row.
    pub fn someone_won(&self) -> bool {
        self.winning_marker().is_some()
    }

    /// Returns true if the center square is free.
    pub fn is_middle_unmarked(&self) -> bool {
        self.is_unmarked(Position::Center)
    }

    /// Returns the first empty key of the first line holding two of `marker`.
    pub fn high_value_key(&self, marker: Marker) -> Option<Position> {
        rules::high_value_key(self, marker)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.squares.chunks(3).enumerate() {
            writeln!(f, "     |     |     ")?;
            writeln!(f, "  {}  |  {}  |  {}  ", cells[0], cells[1], cells[2])?;
            writeln!(f, "     |     |     ")?;
            if row < 2 {
                writeln!(f, " ----+-----+-----")?;
            }
        }
        Ok(())
    }
}
