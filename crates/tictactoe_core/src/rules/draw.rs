//! Full-board detection for tic-tac-toe.

use super::super::Board;
use tracing::instrument;

/// Checks if the board is full (no unmarked squares left).
///
/// A full board with no winner is a tie.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| !s.is_unmarked())
}

#[cfg(test)]
mod tests {
    use super::super::win::winning_marker;
    use super::*;
    use crate::{Marker, Position};

    fn is_tie(board: &Board) -> bool {
        is_full(board) && winning_marker(board).is_none()
    }

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.place(Position::Center, Marker::Human);
        assert!(!is_full(&board));
    }

    #[test]
    fn test_tie_detection() {
        // X O X / O X X / O X O
        let layout = [
            Marker::Human,
            Marker::Computer,
            Marker::Human,
            Marker::Computer,
            Marker::Human,
            Marker::Human,
            Marker::Computer,
            Marker::Human,
            Marker::Computer,
        ];
        let mut board = Board::new();
        for (pos, marker) in Position::ALL.into_iter().zip(layout) {
            board.place(pos, marker);
        }
        assert!(is_tie(&board));
    }

    #[test]
    fn test_full_board_with_winner_is_not_tie() {
        let mut board = Board::new();
        for pos in Position::ALL {
            board.place(pos, Marker::Computer);
        }
        assert!(is_full(&board));
        assert!(!is_tie(&board));
    }
}
