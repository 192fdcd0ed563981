//! Scripted console sessions.

use tictac::{Console, FrontEnd, choose_front_end, rng_from};
use tictac_core::{MemoryStore, ScoreRecord, Scoreboard, ScoreboardStore};

struct Session {
    output: String,
    scores: Scoreboard,
}

fn run(script: &str, dir: &tempfile::TempDir) -> Session {
    let mut output = Vec::new();
    let scores = {
        let mut console = Console::new(
            script.as_bytes(),
            &mut output,
            MemoryStore::new(),
            dir.path().join("last_game.json"),
            rng_from(Some(42)),
        );
        console.run().expect("console run");
        console.store().load().expect("load")
    };
    Session {
        output: String::from_utf8(output).expect("utf8"),
        scores,
    }
}

/// Menu: start game, two players Ada (X) and Bob.
const TWO_PLAYER: &str = "1\n2\nAda\nx\nBob\n";

#[test]
fn test_two_player_win_updates_scoreboard() {
    let dir = tempfile::tempdir().expect("tempdir");
    let script = format!("{TWO_PLAYER}1\n4\n2\n5\n3\n5\n");
    let session = run(&script, &dir);

    assert!(session.output.contains("Ada (X), enter position 1-9"));
    assert!(session.output.contains("Bob (O), enter position 1-9"));
    assert!(session.output.contains("Ada (X) wins!"));
    assert!(session.output.ends_with("Goodbye!\n"));
    assert_eq!(session.scores["Ada"], ScoreRecord { wins: 1, losses: 0, ties: 0 });
    assert_eq!(session.scores["Bob"], ScoreRecord { wins: 0, losses: 1, ties: 0 });
    assert!(dir.path().join("last_game.json").exists());
}

#[test]
fn test_tie_records_both_players() {
    let dir = tempfile::tempdir().expect("tempdir");
    let script = format!("{TWO_PLAYER}1\n2\n3\n5\n4\n6\n8\n7\n9\n5\n");
    let session = run(&script, &dir);

    assert!(session.output.contains("It's a tie!"));
    assert_eq!(session.scores["Ada"], ScoreRecord { wins: 0, losses: 0, ties: 1 });
    assert_eq!(session.scores["Bob"], ScoreRecord { wins: 0, losses: 0, ties: 1 });
}

#[test]
fn test_invalid_input_reprompts() {
    let dir = tempfile::tempdir().expect("tempdir");
    let script = format!("{TWO_PLAYER}abc\n10\n1\n1\nq\n5\n");
    let session = run(&script, &dir);

    assert!(session
        .output
        .contains("Invalid input. Enter a number 1-9, 'undo', 'redo', or 'q'."));
    assert!(session.output.contains("Number out of bounds. Enter 1-9."));
    assert!(session.output.contains("Position already taken."));
    assert!(session.output.contains("Thanks for playing!"));
    assert!(session.scores.is_empty());
}

#[test]
fn test_undo_and_redo_messages() {
    let dir = tempfile::tempdir().expect("tempdir");
    let script = format!("{TWO_PLAYER}5\nundo\nUNDO\nredo\nredo\nq\n5\n");
    let session = run(&script, &dir);

    assert!(session.output.contains("Move undone."));
    assert!(session.output.contains("Nothing to undo."));
    assert!(session.output.contains("Move redone."));
    assert!(session.output.contains("Nothing to redo."));
}

#[test]
fn test_invalid_symbol_defaults_to_x() {
    let dir = tempfile::tempdir().expect("tempdir");
    let session = run("1\n2\nAda\nz\nBob\nq\n5\n", &dir);

    assert!(session.output.contains("Invalid symbol. Defaulting to X."));
    assert!(session.output.contains("Ada (X), enter position"));
}

#[test]
fn test_end_of_input_exits_cleanly() {
    let dir = tempfile::tempdir().expect("tempdir");
    let script = format!("{TWO_PLAYER}5\n");
    let session = run(&script, &dir);

    assert!(session.output.ends_with("Goodbye!\n"));
    assert!(session.scores.is_empty());
}

#[test]
fn test_ai_replies_after_human_move() {
    let dir = tempfile::tempdir().expect("tempdir");
    let session = run("1\n1\nAda\nx\n3\n5\nq\n5\n", &dir);

    assert!(session.output.contains("Hard (Minimax)"));
    assert!(session.output.contains("AI (O) chooses position"));
}

#[test]
fn test_empty_scoreboard_and_features() {
    let dir = tempfile::tempdir().expect("tempdir");
    let session = run("3\n4\n9\n5\n", &dir);

    assert!(session.output.contains("==== SCOREBOARD ===="));
    assert!(session.output.contains("No games played yet."));
    assert!(session.output.contains("Features:"));
    assert!(session.output.contains("Invalid choice. Please enter a valid option."));
}

#[test]
fn test_replay_last_game() {
    let dir = tempfile::tempdir().expect("tempdir");
    let nothing = run("2\n5\n", &dir);
    assert!(nothing.output.contains("No finished game to replay yet."));

    let script = format!("{TWO_PLAYER}1\n4\n2\n5\n3\n2\n\n\n\n\n5\n");
    let session = run(&script, &dir);
    assert!(session.output.contains("Replaying Ada (X) vs Bob (O)"));
    assert!(session.output.contains("Move 5 of 5:"));
    assert!(session.output.contains("Ada (X) won."));
}

#[test]
fn test_choose_front_end() {
    let mut output = Vec::new();
    let choice = choose_front_end("7\n2\n".as_bytes(), &mut output).expect("io");
    assert_eq!(choice, Some(FrontEnd::Interactive));
    let text = String::from_utf8(output).expect("utf8");
    assert!(text.contains("Select mode (1 for Console, 2 for Interactive): "));

    let choice = choose_front_end("".as_bytes(), Vec::new()).expect("io");
    assert_eq!(choice, None);
}
