//! Computer move selection.

use super::{Board, Marker, Position};
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// How hard the computer plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Center if free, otherwise a random square.
    Easy,
    /// Take a winning square, then block, then center, then random.
    #[default]
    Difficult,
}

impl Difficulty {
    /// Returns true if the tactical lookahead is enabled.
    pub fn is_difficult(self) -> bool {
        matches!(self, Difficulty::Difficult)
    }

    /// Returns the display label for this option.
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Difficult => "difficult",
        }
    }
}

/// Why the computer picked its square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Reason {
    /// Completes a computer line.
    #[display("offense")]
    Offense,
    /// Blocks a human line.
    #[display("defense")]
    Defense,
    /// Takes the free center.
    #[display("center")]
    Center,
    /// Uniform pick among unmarked keys.
    #[display("random")]
    Random,
}

/// Picks the computer's next square.
///
/// Priority, first applicable wins:
/// 1. offense: a key completing two computer markers (difficult only)
/// 2. defense: a key completing two human markers (difficult only)
/// 3. the center square
/// 4. a uniformly random unmarked key
///
/// Returns `None` only when the board is full.
#[instrument(skip(board, rng))]
pub fn computer_key<R: Rng + ?Sized>(
    board: &Board,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<Position> {
    let (key, reason) = choose(board, difficulty, rng)?;
    debug!(key = key.key(), %reason, "Computer chose position");
    Some(key)
}

/// Like [`computer_key`] but also reports which rule fired.
pub fn choose<R: Rng + ?Sized>(
    board: &Board,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<(Position, Reason)> {
    if difficulty.is_difficult() {
        if let Some(key) = board.high_value_key(Marker::Computer) {
            return Some((key, Reason::Offense));
        }
        if let Some(key) = board.high_value_key(Marker::Human) {
            return Some((key, Reason::Defense));
        }
    }

    if board.is_middle_unmarked() {
        return Some((Position::Center, Reason::Center));
    }

    board
        .unmarked_keys()
        .choose(rng)
        .copied()
        .map(|key| (key, Reason::Random))
}
