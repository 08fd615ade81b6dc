//! Series orchestration between the human at the console and the computer.

use crate::console::Console;
use crate::{PlayError, display};
use rand::Rng;
use std::io::{BufRead, Write};
use tictactoe_core::{Game, GameOutcome, Marker, MoveError};
use tracing::{debug, info, instrument};

/// Drives a [`Game`] through series after series on a [`Console`].
pub struct Orchestrator<R, W, G> {
    game: Game,
    console: Console<R, W>,
    rng: G,
}

impl<R: BufRead, W: Write, G: Rng> Orchestrator<R, W, G> {
    /// Creates an orchestrator.
    pub fn new(game: Game, console: Console<R, W>, rng: G) -> Self {
        Self { game, console, rng }
    }

    /// Returns the game state.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Consumes the orchestrator and returns its console.
    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Runs series until the player declines another.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<(), PlayError> {
        info!("Starting tic-tac-toe session");

        loop {
            self.console.clear()?;
            display::welcome(self.console.out())?;
            self.configure_series()?;

            while !self.game.is_series_over() {
                self.play_game()?;
            }

            info!(
                winner = ?self.game.series_winner(),
                human_points = self.game.human_points(),
                computer_points = self.game.computer_points(),
                "Series over"
            );
            display::series_result(self.console.out(), &self.game)?;

            if self.console.ask_play_again()? {
                self.game.reset_points();
            } else {
                break;
            }
        }

        display::goodbye(self.console.out())?;
        info!("Session ended");
        Ok(())
    }

    /// Asks who opens and how hard the computer plays.
    #[instrument(skip(self))]
    fn configure_series(&mut self) -> Result<(), PlayError> {
        let first = if self.console.ask_human_first()? {
            Marker::Human
        } else {
            Marker::Computer
        };
        let difficulty = self.console.ask_difficulty()?;
        self.game.configure_series(first, difficulty);

        self.console
            .wait_for_enter("OK. We're ready to begin. Press 'enter' to continue.")?;
        self.console.clear()
    }

    /// Plays one game to completion and scores it.
    #[instrument(skip(self), fields(first_to_move = %self.game.first_to_move()))]
    pub fn play_game(&mut self) -> Result<GameOutcome, PlayError> {
        display::board(self.console.out(), &self.game)?;

        loop {
            self.current_player_moves()?;
            if self.game.is_game_over() {
                break;
            }
            if self.game.is_human_turn() {
                self.clear_screen_and_display_board()?;
            }
        }

        let outcome = self.game.outcome().ok_or(MoveError::GameOver)?;
        self.clear_screen_and_display_board()?;
        display::game_result(self.console.out(), outcome)?;

        self.game.finish_game()?;

        self.console.say("** Ready to continue the series? **")?;
        self.console.wait_for_enter("Press 'return' to continue.")?;
        self.console.clear()?;
        Ok(outcome)
    }

    /// Lets the side due to move pick and play a square.
    fn current_player_moves(&mut self) -> Result<(), PlayError> {
        let key = if self.game.is_human_turn() {
            self.console.ask_move(&self.game.unmarked_keys())?
        } else {
            self.game
                .computer_key(&mut self.rng)
                .ok_or(MoveError::GameOver)?
        };
        debug!(marker = %self.game.current_marker(), key = key.key(), "Playing move");
        self.game.current_player_moves(key)?;
        Ok(())
    }

    fn clear_screen_and_display_board(&mut self) -> Result<(), PlayError> {
        self.console.clear()?;
        display::board(self.console.out(), &self.game)?;
        Ok(())
    }
}
