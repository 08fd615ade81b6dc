//! Line-based terminal I/O: prompts, validation and screen clearing.
//!
//! Every prompt loops until it gets a usable answer. The parsing is done
//! by the plain `parse_*` functions so it can be tested without a
//! terminal.

use crate::PlayError;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use std::io::{BufRead, Write};
use tictactoe_core::{Difficulty, MoveError, Position, join_or_default};
use tracing::{debug, instrument, warn};

/// Interprets a yes/no answer.
pub fn parse_yes_no(input: &str) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// Interprets an easy/difficult answer.
pub fn parse_difficulty(input: &str) -> Option<Difficulty> {
    match input.trim().to_lowercase().as_str() {
        "e" | "easy" => Some(Difficulty::Easy),
        "d" | "difficult" => Some(Difficulty::Difficult),
        _ => None,
    }
}

/// Interprets a typed key, accepting only currently unmarked positions.
pub fn parse_move(input: &str, unmarked: &[Position]) -> Result<Position, MoveError> {
    let pos = Position::parse_key(input)?;
    if unmarked.contains(&pos) {
        Ok(pos)
    } else {
        Err(MoveError::OccupiedSquare(pos))
    }
}

/// Terminal wrapper over any line reader and writer.
pub struct Console<R, W> {
    input: R,
    output: W,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console. With `clear_screen` off, screens are appended
    /// instead of redrawn.
    pub fn new(input: R, output: W, clear_screen: bool) -> Self {
        Self {
            input,
            output,
            clear_screen,
        }
    }

    /// Returns the writer for rendering.
    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    /// Consumes the console and returns its writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Writes one line of text.
    pub fn say(&mut self, text: &str) -> Result<(), PlayError> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Clears the terminal if clearing is enabled.
    #[instrument(skip(self))]
    pub fn clear(&mut self) -> Result<(), PlayError> {
        if self.clear_screen {
            execute!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }

    /// Reads one line, failing on end of input.
    fn read_line(&mut self) -> Result<String, PlayError> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            warn!("Input closed");
            return Err(PlayError::InputClosed);
        }
        debug!(input = %line.trim_end(), "Read line");
        Ok(line)
    }

    /// Shows a titled question until `parse` accepts the answer.
    fn ask<T>(
        &mut self,
        title: &str,
        question: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> Result<T, PlayError> {
        loop {
            self.say(title)?;
            self.say(question)?;
            let line = self.read_line()?;
            if let Some(answer) = parse(&line) {
                return Ok(answer);
            }
            self.say("That was not a valid response")?;
        }
    }

    /// Asks whether the human opens the series.
    #[instrument(skip(self))]
    pub fn ask_human_first(&mut self) -> Result<bool, PlayError> {
        self.ask(
            "** Set First Player **",
            "Would you like to play first? Enter 'y' or 'n'",
            parse_yes_no,
        )
    }

    /// Asks for the computer's difficulty.
    #[instrument(skip(self))]
    pub fn ask_difficulty(&mut self) -> Result<Difficulty, PlayError> {
        self.ask(
            "** Set Difficulty **",
            "Would you like to play easy or difficult mode? Enter 'e' or 'd'",
            parse_difficulty,
        )
    }

    /// Asks whether to start another series.
    #[instrument(skip(self))]
    pub fn ask_play_again(&mut self) -> Result<bool, PlayError> {
        self.ask(
            "** Play again? **",
            "Would you like to play another series? Enter 'y' or 'n'",
            parse_yes_no,
        )
    }

    /// Asks for a square until an unmarked key is typed.
    #[instrument(skip(self))]
    pub fn ask_move(&mut self, unmarked: &[Position]) -> Result<Position, PlayError> {
        self.say(&format!(
            "Choose a position to place your marker: {}",
            join_or_default(unmarked)
        ))?;
        loop {
            let line = self.read_line()?;
            match parse_move(&line, unmarked) {
                Ok(pos) => return Ok(pos),
                Err(err) => {
                    debug!(%err, "Rejected move");
                    self.say("Sorry, that's not a valid choice.")?;
                }
            }
        }
    }

    /// Shows `message` and waits for any line.
    pub fn wait_for_enter(&mut self, message: &str) -> Result<(), PlayError> {
        self.say(message)?;
        self.read_line()?;
        Ok(())
    }
}
