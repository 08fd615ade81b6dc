//! Two-in-a-row detection used by the computer player.

use super::super::{Board, Marker, Position};
use super::WINNING_LINES;
use tracing::{debug, instrument};

/// Finds a key that would complete a line for `marker`.
///
/// Scans [`WINNING_LINES`] in order. A line qualifies when exactly two of
/// its squares hold `marker`; the first unmarked key of the first
/// qualifying line is returned. Lines whose remaining square is taken are
/// skipped because they have no unmarked key.
#[instrument(skip(board))]
pub fn high_value_key(board: &Board, marker: Marker) -> Option<Position> {
    for line in WINNING_LINES {
        let owned = line
            .iter()
            .filter(|pos| board.get(**pos).marker() == Some(marker))
            .count();
        if owned != 2 {
            continue;
        }
        if let Some(key) = line.iter().copied().find(|pos| board.is_unmarked(*pos)) {
            debug!(%marker, key = key.key(), "Found two-in-a-row");
            return Some(key);
        }
    }

    None
}
