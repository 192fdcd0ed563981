//! Parsing console move prompts.

use derive_more::Display;
use tictac_core::Coord;
use tracing::instrument;

/// What the player typed at a move prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place a mark.
    Place(Coord),
    /// Take back the last move.
    Undo,
    /// Replay an undone move.
    Redo,
    /// Leave the game.
    Quit,
}

/// Malformed console input.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum InputError {
    /// Input that is neither a position nor a command.
    #[display("Invalid input. Enter a number 1-9, 'undo', 'redo', or 'q'.")]
    NotACommand {
        /// What was typed.
        input: String,
    },
    /// A number outside 1-9.
    #[display("Number out of bounds. Enter 1-9.")]
    OutOfBounds {
        /// The number typed.
        value: u64,
    },
}

impl std::error::Error for InputError {}

/// Parses a move prompt answer. Case and surrounding whitespace are ignored.
#[instrument]
pub fn parse_command(input: &str) -> Result<Command, InputError> {
    let trimmed = input.trim();
    match trimmed.to_ascii_lowercase().as_str() {
        "undo" => return Ok(Command::Undo),
        "redo" => return Ok(Command::Redo),
        "q" => return Ok(Command::Quit),
        _ => {}
    }

    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InputError::NotACommand {
            input: trimmed.to_string(),
        });
    }
    let value: u64 = trimmed.parse().unwrap_or(u64::MAX);
    usize::try_from(value)
        .ok()
        .and_then(Coord::from_key)
        .map(Command::Place)
        .ok_or(InputError::OutOfBounds { value })
}
