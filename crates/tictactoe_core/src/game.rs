//! Series state for a human vs. computer match.
//!
//! [`Game`] owns the board, whose turn it is, who opened the current game
//! and the running series score. It performs no I/O: the caller supplies
//! each move and decides when to show what.

use super::action::MoveError;
use super::strategy::{self, Difficulty};
use super::{Board, Marker, Player, Position};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Points needed to take a series.
pub const POINTS_TARGET: u32 = 3;

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    /// One side completed a line.
    Won(Marker),
    /// The board filled up without a line.
    Tie,
}

impl GameOutcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Marker> {
        match self {
            GameOutcome::Won(marker) => Some(*marker),
            GameOutcome::Tie => None,
        }
    }
}

/// Human vs. computer series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    human: Player,
    computer: Player,
    current_marker: Marker,
    first_to_move: Marker,
    human_points: u32,
    computer_points: u32,
    difficulty: Difficulty,
    points_target: u32,
}

impl Game {
    /// Creates a series played to [`POINTS_TARGET`].
    #[instrument]
    pub fn new() -> Self {
        Self::with_points_target(POINTS_TARGET)
    }

    /// Creates a series played to `points_target` wins.
    #[instrument]
    pub fn with_points_target(points_target: u32) -> Self {
        Self {
            board: Board::new(),
            human: Player::new(Marker::Human),
            computer: Player::new(Marker::Computer),
            current_marker: Marker::Human,
            first_to_move: Marker::Human,
            human_points: 0,
            computer_points: 0,
            difficulty: Difficulty::default(),
            points_target,
        }
    }

    /// Sets the opening side and difficulty for a new series.
    #[instrument(skip(self))]
    pub fn configure_series(&mut self, first_to_move: Marker, difficulty: Difficulty) {
        info!(%first_to_move, difficulty = difficulty.label(), "Configuring series");
        self.first_to_move = first_to_move;
        self.current_marker = first_to_move;
        self.difficulty = difficulty;
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the human player.
    pub fn human(&self) -> Player {
        self.human
    }

    /// Returns the computer player.
    pub fn computer(&self) -> Player {
        self.computer
    }

    /// Returns the marker due to move.
    pub fn current_marker(&self) -> Marker {
        self.current_marker
    }

    /// Returns the marker that opened the current game.
    pub fn first_to_move(&self) -> Marker {
        self.first_to_move
    }

    /// Returns true if the human is due to move.
    pub fn is_human_turn(&self) -> bool {
        self.current_marker == self.human.marker()
    }

    /// Returns the human's series points.
    pub fn human_points(&self) -> u32 {
        self.human_points
    }

    /// Returns the computer's series points.
    pub fn computer_points(&self) -> u32 {
        self.computer_points
    }

    /// Returns the points needed to take the series.
    pub fn points_target(&self) -> u32 {
        self.points_target
    }

    /// Returns the series difficulty.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Returns the empty positions in ascending key order.
    pub fn unmarked_keys(&self) -> Vec<Position> {
        self.board.unmarked_keys()
    }

    /// Plays `key` for the side due to move, then passes the turn.
    #[instrument(skip(self), fields(marker = %self.current_marker))]
    pub fn current_player_moves(&mut self, key: Position) -> Result<(), MoveError> {
        if self.is_game_over() {
            return Err(MoveError::GameOver);
        }
        self.board.try_place(key, self.current_marker)?;
        debug!(key = key.key(), "Move applied");
        self.current_marker = self.current_marker.opponent();
        Ok(())
    }

    /// Picks the computer's square for the current board.
    pub fn computer_key<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Position> {
        strategy::computer_key(&self.board, self.difficulty, rng)
    }

    /// Returns true once someone has won or the board is full.
    pub fn is_game_over(&self) -> bool {
        self.board.someone_won() || self.board.is_full()
    }

    /// Returns the marker that completed a line in the current game.
    pub fn winning_marker(&self) -> Option<Marker> {
        self.board.winning_marker()
    }

    /// Returns the outcome of the current game, if it is over.
    pub fn outcome(&self) -> Option<GameOutcome> {
        match self.board.winning_marker() {
            Some(marker) => Some(GameOutcome::Won(marker)),
            None if self.board.is_full() => Some(GameOutcome::Tie),
            None => None,
        }
    }

    /// Scores the finished game and sets up the next one.
    ///
    /// The winner gains a point, the board is cleared and the side that
    /// did not open this game opens the next.
    #[instrument(skip(self))]
    pub fn finish_game(&mut self) -> Result<GameOutcome, MoveError> {
        let outcome = self.outcome().ok_or(MoveError::GameOver)?;
        match outcome.winner() {
            Some(Marker::Human) => self.human_points += 1,
            Some(Marker::Computer) => self.computer_points += 1,
            None => {}
        }
        info!(
            ?outcome,
            human_points = self.human_points,
            computer_points = self.computer_points,
            "Game finished"
        );
        self.board.reset();
        self.first_to_move = self.first_to_move.opponent();
        self.current_marker = self.first_to_move;
        Ok(outcome)
    }

    /// Returns the side that reached the points target.
    ///
    /// The computer is checked first.
    pub fn series_winner(&self) -> Option<Marker> {
        if self.computer_points >= self.points_target {
            Some(Marker::Computer)
        } else if self.human_points >= self.points_target {
            Some(Marker::Human)
        } else {
            None
        }
    }

    /// Returns true once either side reached the points target.
    pub fn is_series_over(&self) -> bool {
        self.series_winner().is_some()
    }

    /// Zeroes both scores for a new series.
    #[instrument(skip(self))]
    pub fn reset_points(&mut self) {
        self.human_points = 0;
        self.computer_points = 0;
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
