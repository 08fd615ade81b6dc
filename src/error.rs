//! Errors raised while running a series on the console.

use derive_more::{Display, Error};
use tictactoe_core::MoveError;

/// Failure that ends the console session.
///
/// Invalid answers never surface here; the prompts keep asking until they
/// get one. Only a dead terminal or a closed input stream stops play.
#[derive(Debug, Display, Error)]
pub enum PlayError {
    /// Reading from or writing to the terminal failed.
    #[display("Terminal I/O failed: {}", _0)]
    Io(std::io::Error),

    /// Input reached end of file while waiting for an answer.
    #[display("Input closed while waiting for an answer")]
    InputClosed,

    /// A move the game loop produced was rejected by the board.
    #[display("Move rejected: {}", _0)]
    Move(MoveError),
}

impl From<std::io::Error> for PlayError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<MoveError> for PlayError {
    fn from(err: MoveError) -> Self {
        Self::Move(err)
    }
}
