//! Persistent win/loss/tie counts keyed by player display name.
//!
//! Names are not identities: two people sharing a name share a record.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::StoreError;

/// Counters for one player name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display)]
#[display("{wins} Wins, {losses} Losses, {ties} Ties")]
pub struct ScoreRecord {
    /// Games won.
    pub wins: u32,
    /// Games lost.
    pub losses: u32,
    /// Games tied.
    pub ties: u32,
}

/// Name to counters.
pub type Scoreboard = BTreeMap<String, ScoreRecord>;

/// Outcome of a finished game as the scoreboard sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchResult {
    /// Display name of the winner.
    Winner(String),
    /// Nobody won.
    Tie,
}

/// Updates `board` for a game between `first` and `second`.
///
/// Missing names start at zero. A winner name matching neither player only
/// creates the entries.
#[instrument(skip(board))]
pub fn apply_result(board: &mut Scoreboard, result: &MatchResult, first: &str, second: &str) {
    board.entry(first.to_string()).or_default();
    board.entry(second.to_string()).or_default();

    match result {
        MatchResult::Tie => {
            for name in [first, second] {
                if let Some(record) = board.get_mut(name) {
                    record.ties += 1;
                }
            }
        }
        MatchResult::Winner(winner) => {
            let loser = if winner == first {
                second
            } else if winner == second {
                first
            } else {
                warn!(%winner, "Winner is not a player in this game");
                return;
            };
            if let Some(record) = board.get_mut(winner.as_str()) {
                record.wins += 1;
            }
            if let Some(record) = board.get_mut(loser) {
                record.losses += 1;
            }
        }
    }
}

/// Backing storage for the scoreboard.
pub trait ScoreboardStore: std::fmt::Debug {
    /// Loads the whole scoreboard.
    fn load(&self) -> Result<Scoreboard, StoreError>;

    /// Replaces the stored scoreboard.
    fn save(&mut self, board: &Scoreboard) -> Result<(), StoreError>;

    /// Applies a result and persists it immediately, returning the new board.
    fn record_result(
        &mut self,
        result: &MatchResult,
        first: &str,
        second: &str,
    ) -> Result<Scoreboard, StoreError> {
        let mut board = self.load()?;
        apply_result(&mut board, result, first, second);
        self.save(&board)?;
        info!(?result, %first, %second, "Result recorded");
        Ok(board)
    }
}

/// Scoreboard kept as a JSON object in a file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store backed by `path`. Nothing is read until [`ScoreboardStore::load`].
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScoreboardStore for JsonFileStore {
    /// A missing, unreadable or malformed file yields an empty scoreboard.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> Result<Scoreboard, StoreError> {
        if !self.path.exists() {
            debug!("No scoreboard file yet");
            return Ok(Scoreboard::new());
        }
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                warn!(error = %e, "Failed to read scoreboard, starting empty");
                return Ok(Scoreboard::new());
            }
        };
        match serde_json::from_str(&content) {
            Ok(board) => Ok(board),
            Err(e) => {
                warn!(error = %e, "Malformed scoreboard, starting empty");
                Ok(Scoreboard::new())
            }
        }
    }

    #[instrument(skip(self, board), fields(path = %self.path.display(), players = board.len()))]
    fn save(&mut self, board: &Scoreboard) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(board)?;
        std::fs::write(&self.path, json).map_err(|e| {
            StoreError::new(format!("Failed to write '{}': {}", self.path.display(), e))
        })?;
        debug!("Scoreboard written");
        Ok(())
    }
}

/// Scoreboard held in memory only.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    board: Scoreboard,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-filled with `board`.
    pub fn with_board(board: Scoreboard) -> Self {
        Self { board }
    }
}

impl ScoreboardStore for MemoryStore {
    fn load(&self) -> Result<Scoreboard, StoreError> {
        Ok(self.board.clone())
    }

    fn save(&mut self, board: &Scoreboard) -> Result<(), StoreError> {
        self.board = board.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_display() {
        let record = ScoreRecord {
            wins: 3,
            losses: 1,
            ties: 2,
        };
        assert_eq!(record.to_string(), "3 Wins, 1 Losses, 2 Ties");
    }

    #[test]
    fn test_tie_on_empty_scoreboard() {
        let mut store = MemoryStore::new();
        let board = store
            .record_result(&MatchResult::Tie, "Ada", "Bob")
            .expect("record");
        let expected = ScoreRecord {
            wins: 0,
            losses: 0,
            ties: 1,
        };
        assert_eq!(board.get("Ada"), Some(&expected));
        assert_eq!(board.get("Bob"), Some(&expected));
    }

    #[test]
    fn test_win_increments_winner_and_loser() {
        let mut board = Scoreboard::new();
        apply_result(&mut board, &MatchResult::Winner("Bob".into()), "Ada", "Bob");
        apply_result(&mut board, &MatchResult::Winner("Bob".into()), "Ada", "Bob");
        apply_result(&mut board, &MatchResult::Winner("Ada".into()), "Ada", "Bob");

        assert_eq!(board["Ada"], ScoreRecord { wins: 1, losses: 2, ties: 0 });
        assert_eq!(board["Bob"], ScoreRecord { wins: 2, losses: 1, ties: 0 });
    }

    #[test]
    fn test_unknown_winner_only_creates_entries() {
        let mut board = Scoreboard::new();
        apply_result(&mut board, &MatchResult::Winner("Eve".into()), "Ada", "Bob");
        assert_eq!(board.len(), 2);
        assert_eq!(board["Ada"], ScoreRecord::default());
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = JsonFileStore::new(dir.path().join("scoreboard.json"));
        assert!(store.load().expect("load").is_empty());
    }

    #[test]
    fn test_malformed_file_is_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("scoreboard.json");
        std::fs::write(&path, "not json").expect("write");
        let store = JsonFileStore::new(path);
        assert!(store.load().expect("load").is_empty());
    }

    #[test]
    fn test_file_store_persists_across_instances() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("scoreboard.json");

        let mut store = JsonFileStore::new(&path);
        store
            .record_result(&MatchResult::Winner("Ada".into()), "Ada", "AI")
            .expect("record");

        let reopened = JsonFileStore::new(&path);
        let board = reopened.load().expect("load");
        assert_eq!(board["Ada"].wins, 1);
        assert_eq!(board["AI"].losses, 1);

        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).expect("read")).expect("json");
        assert_eq!(raw["Ada"]["wins"], 1);
        assert_eq!(raw["AI"]["ties"], 0);
    }

    #[test]
    fn test_write_failure_is_reported() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut store = JsonFileStore::new(dir.path().join("missing_dir").join("scoreboard.json"));
        let result = store.record_result(&MatchResult::Tie, "Ada", "Bob");
        assert!(result.is_err());
    }
}
