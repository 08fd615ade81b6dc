//! The eight lines that win a game.

use super::super::Position;

/// Rows, then columns, then diagonals.
///
/// Scan order matters: both win detection and [`high_value_key`]
/// report the first qualifying line.
///
/// [`high_value_key`]: super::high_value_key
pub const WINNING_LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::BottomLeft, Position::Center, Position::TopRight],
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_lines_are_distinct_triples() {
        let unique: HashSet<[Position; 3]> = WINNING_LINES.iter().copied().collect();
        assert_eq!(unique.len(), 8);
        for line in WINNING_LINES {
            let keys: HashSet<u8> = line.iter().map(|p| p.key()).collect();
            assert_eq!(keys.len(), 3);
        }
    }

    #[test]
    fn test_line_keys() {
        let keys: Vec<[u8; 3]> = WINNING_LINES
            .iter()
            .map(|line| [line[0].key(), line[1].key(), line[2].key()])
            .collect();
        assert_eq!(
            keys,
            vec![
                [1, 2, 3],
                [4, 5, 6],
                [7, 8, 9],
                [1, 4, 7],
                [2, 5, 8],
                [3, 6, 9],
                [1, 5, 9],
                [7, 5, 3],
            ]
        );
    }
}
