//! Win detection logic for tic-tac-toe.

use super::super::{Board, Marker};
use super::WINNING_LINES;
use tracing::instrument;

/// Returns the marker holding all three squares of a line.
///
/// Lines are scanned in [`WINNING_LINES`] order and the first complete
/// line decides.
#[instrument(skip(board))]
pub fn winning_marker(board: &Board) -> Option<Marker> {
    for [a, b, c] in WINNING_LINES {
        let sq = board.get(a);
        if !sq.is_unmarked() && sq == board.get(b) && sq == board.get(c) {
            return sq.marker();
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(winning_marker(&board), None);
        assert!(!board.someone_won());
    }

    #[test]
    fn test_every_line_wins_for_either_marker() {
        for marker in [Marker::Human, Marker::Computer] {
            for line in WINNING_LINES {
                let mut board = Board::new();
                for pos in line {
                    board.place(pos, marker);
                }
                assert_eq!(winning_marker(&board), Some(marker), "line {:?}", line);
                assert!(board.someone_won());
            }
        }
    }

    #[test]
    fn test_top_row() {
        let mut board = Board::new();
        board.place(Position::TopLeft, Marker::Human);
        board.place(Position::TopCenter, Marker::Human);
        board.place(Position::TopRight, Marker::Human);
        assert_eq!(winning_marker(&board), Some(Marker::Human));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut board = Board::new();
        board.place(Position::TopLeft, Marker::Human);
        board.place(Position::TopCenter, Marker::Computer);
        board.place(Position::TopRight, Marker::Human);
        assert_eq!(winning_marker(&board), None);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        board.place(Position::BottomLeft, Marker::Computer);
        board.place(Position::Center, Marker::Computer);
        assert_eq!(winning_marker(&board), None);
    }
}
