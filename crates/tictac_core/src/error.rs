//! Error types for game state and persistence.

use derive_more::{Display, Error};
use tracing::instrument;

use crate::Move;

/// Why a move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum IllegalReason {
    /// Row or column outside `0..3`.
    #[display("position is off the board")]
    OutOfRange,
    /// The square already holds a mark.
    #[display("square is already taken")]
    Occupied,
    /// The game already reached a win or tie.
    #[display("game is already over")]
    GameOver,
}

/// Error that can occur when driving a [`GameState`](crate::GameState).
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GameError {
    /// The requested move is not legal right now.
    #[display("Illegal move at ({row}, {col}): {reason}")]
    IllegalMove {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Why it was rejected.
        reason: IllegalReason,
    },

    /// The undo stack is empty.
    #[display("Nothing to undo")]
    NothingToUndo,

    /// The redo stack is empty.
    #[display("Nothing to redo")]
    NothingToRedo,

    /// Both players chose the same mark.
    #[display("Players must use different marks")]
    DuplicateMark,

    /// A player name was blank.
    #[display("Player name must not be empty")]
    EmptyName,

    /// A saved move disagrees with the move the game produced.
    #[display("Recorded move {index} does not match the game: expected {expected}, found {found}")]
    RecordMismatch {
        /// Position of the move in the record.
        index: usize,
        /// The move the game produced.
        expected: Move,
        /// The move stored in the record.
        found: Move,
    },
}

impl std::error::Error for GameError {}

/// Persistence error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Store error: {} at {}:{}", message, file, line)]
pub struct StoreError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl StoreError {
    /// Creates a new store error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for StoreError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}

impl From<serde_json::Error> for StoreError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Self::new(format!("JSON error: {}", err))
    }
}
