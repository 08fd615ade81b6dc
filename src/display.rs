//! Text screens shown between moves.

use std::io::{self, Write};
use tictactoe_core::{Game, GameOutcome, Marker};

/// Writes the opening banner.
pub fn welcome(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Welcome to Tic Tac Toe!")?;
    writeln!(out)
}

/// Writes the closing banner.
pub fn goodbye(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Thanks for playing Tic Tac Toe! Goodbye")?;
    writeln!(out)
}

/// Writes the running series score.
pub fn score(out: &mut impl Write, game: &Game) -> io::Result<()> {
    writeln!(out, "** Series Score **")?;
    writeln!(out, "Human:     {}", game.human_points())?;
    writeln!(out, "Computer:  {}", game.computer_points())?;
    writeln!(out)?;
    writeln!(
        out,
        "First player to {} wins the series",
        game.points_target()
    )?;
    writeln!(out)
}

/// Writes which symbol each side plays.
pub fn player_marks(out: &mut impl Write, game: &Game) -> io::Result<()> {
    writeln!(out, "** Player Marks **")?;
    writeln!(out, "You:      '{}'", game.human().marker())?;
    writeln!(out, "Computer: '{}'", game.computer().marker())?;
    writeln!(out)
}

/// Writes score, marks and the grid, in that order.
pub fn board(out: &mut impl Write, game: &Game) -> io::Result<()> {
    score(out, game)?;
    player_marks(out, game)?;
    write!(out, "{}", game.board())?;
    writeln!(out)?;
    writeln!(out)
}

/// Writes the result of a finished game.
pub fn game_result(out: &mut impl Write, outcome: GameOutcome) -> io::Result<()> {
    writeln!(out, "** Game Result **")?;
    match outcome {
        GameOutcome::Won(Marker::Human) => writeln!(out, "You win this game!")?,
        GameOutcome::Won(Marker::Computer) => writeln!(out, "Computer wins this game.")?,
        GameOutcome::Tie => writeln!(out, "The board is full -- tie game.")?,
    }
    writeln!(out)
}

/// Writes the series winner followed by the final score.
pub fn series_result(out: &mut impl Write, game: &Game) -> io::Result<()> {
    writeln!(out, "** Series Result **")?;
    match game.series_winner() {
        Some(Marker::Human) => writeln!(out, "You won the series!")?,
        _ => writeln!(out, "Computer won the series.")?,
    }
    writeln!(out)?;
    score(out, game)
}
