//! End-to-end series played through the console with scripted input.

use rand::RngCore;
use std::io::Cursor;
use tictactoe_core::Game;
use tictactoe_series::{Console, Orchestrator, PlayError};

/// Always draws zero, so random picks take the lowest unmarked key.
struct LowestRng;

impl RngCore for LowestRng {
    fn next_u32(&mut self) -> u32 {
        0
    }

    fn next_u64(&mut self) -> u64 {
        0
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        dst.fill(0);
    }
}

type ScriptedOrchestrator = Orchestrator<Cursor<Vec<u8>>, Vec<u8>, LowestRng>;

fn orchestrator(game: Game, script: &[&str]) -> ScriptedOrchestrator {
    let mut input = script.join("\n");
    input.push('\n');
    let console = Console::new(Cursor::new(input.into_bytes()), Vec::new(), false);
    Orchestrator::new(game, console, LowestRng)
}

fn transcript(orchestrator: ScriptedOrchestrator) -> String {
    String::from_utf8(orchestrator.into_console().into_output()).unwrap()
}

#[test]
fn test_human_sweeps_easy_series() {
    let script = [
        // Setup, with one rejected answer.
        "maybe", "y", "e", "",
        // Game 1, human opens: computer answers 5, 2, 4.
        "1", "9", "3", "6", "",
        // Game 2, computer opens on 5; two rejected keys first.
        "5", "abc", "1", "8", "7", "9", "",
        // Game 3, human opens again.
        "1", "9", "3", "6", "",
        // No second series.
        "n",
    ];
    let mut orchestrator = orchestrator(Game::new(), &script);
    orchestrator.run().unwrap();

    assert_eq!(orchestrator.game().human_points(), 3);
    assert_eq!(orchestrator.game().computer_points(), 0);

    let text = transcript(orchestrator);
    assert_eq!(text.matches("You win this game!").count(), 3);
    assert_eq!(text.matches("That was not a valid response").count(), 1);
    assert_eq!(text.matches("Sorry, that's not a valid choice.").count(), 2);
    assert!(text.contains("You won the series!"));
    assert!(text.contains("Thanks for playing Tic Tac Toe! Goodbye"));

    // Game 2 was opened by the computer, which took the center.
    assert_eq!(
        text.matches("Choose a position to place your marker: 1, 2, 3, 4, 5, 6, 7, 8, or 9")
            .count(),
        2
    );
    assert!(text.contains("Choose a position to place your marker: 1, 2, 3, 4, 6, 7, 8, or 9"));
}

#[test]
fn test_play_again_resets_points() {
    let script = [
        // Series 1: difficult computer, first to one point.
        "y", "d", "",
        "1", "9", "3", "",
        "y",
        // Series 2: computer opens on easy.
        "n", "e", "",
        "1", "3", "6", "9", "",
        "n",
    ];
    let mut orchestrator = orchestrator(Game::with_points_target(1), &script);
    orchestrator.run().unwrap();

    assert_eq!(orchestrator.game().human_points(), 1);
    assert_eq!(orchestrator.game().computer_points(), 0);

    let text = transcript(orchestrator);
    assert_eq!(text.matches("Welcome to Tic Tac Toe!").count(), 2);
    assert!(text.contains("Computer wins this game."));
    assert!(text.contains("Computer won the series."));
    assert!(text.contains("You won the series!"));
    assert!(text.contains("First player to 1 wins the series"));
}

#[test]
fn test_closed_input_stops_the_session() {
    let mut orchestrator = orchestrator(Game::new(), &["y", "d", "", "1"]);
    let result = orchestrator.run();
    assert!(matches!(result, Err(PlayError::InputClosed)));
    assert_eq!(orchestrator.game().human_points(), 0);
}

#[test]
fn test_board_is_redrawn_before_each_human_turn() {
    // Human opens: initial board, then one redraw after each computer reply
    // (three), then the result screen.
    let script = ["y", "e", "", "1", "9", "3", "6", ""];
    let mut orchestrator = orchestrator(Game::with_points_target(1), &script);
    let _ = orchestrator.run();

    let text = transcript(orchestrator);
    assert_eq!(text.matches("** Series Score **").count(), 1 + 3 + 1 + 1);
}
