//! Saved games and replay.

use std::path::Path;

use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::{Board, GameError, GameState, Move, Player, StoreError};

/// The players and ordered moves of a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct GameRecord {
    players: [Player; 2],
    moves: Vec<Move>,
}

impl GameRecord {
    /// Re-plays the moves from an empty board.
    ///
    /// Frame 0 is the empty board; frame `n` is the board after move `n`.
    ///
    /// # Errors
    ///
    /// Returns a [`GameError`] if the record does not describe a legal game.
    #[instrument(skip(self), fields(moves = self.moves.len()))]
    pub fn replay(&self) -> Result<Vec<Board>, GameError> {
        let mut frames = Vec::with_capacity(self.moves.len() + 1);
        let state = self.play_through(|state| frames.push(state.board().clone()))?;
        debug!(frames = frames.len(), turns = state.turns_played(), "Replay built");
        Ok(frames)
    }

    /// The final state reached by this record.
    ///
    /// # Errors
    ///
    /// Same as [`GameRecord::replay`].
    pub fn final_state(&self) -> Result<GameState, GameError> {
        self.play_through(|_| {})
    }

    /// Applies every move from a fresh game, calling `frame` on the empty
    /// board and after each move. Each stored move must match the mark and
    /// player the game itself assigns.
    fn play_through(&self, mut frame: impl FnMut(&GameState)) -> Result<GameState, GameError> {
        let [first, second] = self.players.clone();
        let mut state = GameState::new(first, second)?;
        frame(&state);
        for (index, found) in self.moves.iter().enumerate() {
            state.apply(found.coord)?;
            let expected = state.history().last().copied();
            if let Some(expected) = expected.filter(|mv| mv != found) {
                warn!(index, %expected, %found, "Record disagrees with replay");
                return Err(GameError::RecordMismatch {
                    index,
                    expected,
                    found: *found,
                });
            }
            frame(&state);
        }
        Ok(state)
    }

    /// Writes the record as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if serialization or the write fails.
    #[instrument(skip(self, path), fields(path = %path.as_ref().display()))]
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)?;
        info!(moves = self.moves.len(), "Game record saved");
        Ok(())
    }

    /// Reads a record written by [`GameRecord::save`]. A missing file is `None`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the file exists but cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Option<Self>, StoreError> {
        let path = path.as_ref();
        if !path.exists() {
            debug!("No saved game");
            return Ok(None);
        }
        let content = std::fs::read_to_string(path)?;
        let record = serde_json::from_str(&content)?;
        Ok(Some(record))
    }
}
