//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Which side owns a mark on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Marker {
    /// The human player, drawn as `X`.
    Human,
    /// The computer player, drawn as `O`.
    Computer,
}

impl Marker {
    /// Returns the character drawn on the board for this marker.
    pub fn symbol(self) -> char {
        match self {
            Marker::Human => 'X',
            Marker::Computer => 'O',
        }
    }

    /// Returns the other side.
    pub fn opponent(self) -> Self {
        match self {
            Marker::Human => Marker::Computer,
            Marker::Computer => Marker::Human,
        }
    }
}

impl std::fmt::Display for Marker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Unmarked square.
    #[default]
    Empty,
    /// Square holding a marker.
    Occupied(Marker),
}

impl Square {
    /// Returns true if no marker has been placed here.
    pub fn is_unmarked(self) -> bool {
        matches!(self, Square::Empty)
    }

    /// Returns the marker on this square, if any.
    pub fn marker(self) -> Option<Marker> {
        match self {
            Square::Empty => None,
            Square::Occupied(marker) => Some(marker),
        }
    }

    /// Places a marker on this square.
    pub fn set_marker(&mut self, marker: Marker) {
        *self = Square::Occupied(marker);
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Square::Empty => write!(f, " "),
            Square::Occupied(marker) => write!(f, "{}", marker),
        }
    }
}

/// One side of the match, identified by its marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    marker: Marker,
}

impl Player {
    /// Creates a player that plays the given marker.
    #[instrument]
    pub fn new(marker: Marker) -> Self {
        Self { marker }
    }

    /// Returns this player's marker.
    pub fn marker(&self) -> Marker {
        self.marker
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_symbols() {
        assert_eq!(Marker::Human.symbol(), 'X');
        assert_eq!(Marker::Computer.symbol(), 'O');
        assert_eq!(Marker::Human.to_string(), "X");
    }

    #[test]
    fn test_marker_opponent() {
        assert_eq!(Marker::Human.opponent(), Marker::Computer);
        assert_eq!(Marker::Computer.opponent(), Marker::Human);
    }

    #[test]
    fn test_square_starts_unmarked() {
        let square = Square::default();
        assert!(square.is_unmarked());
        assert_eq!(square.marker(), None);
        assert_eq!(square.to_string(), " ");
    }

    #[test]
    fn test_square_set_marker() {
        let mut square = Square::Empty;
        square.set_marker(Marker::Computer);
        assert!(!square.is_unmarked());
        assert_eq!(square.marker(), Some(Marker::Computer));
        assert_eq!(square.to_string(), "O");
    }

    #[test]
    fn test_player_marker() {
        assert_eq!(Player::new(Marker::Human).marker(), Marker::Human);
    }
}
