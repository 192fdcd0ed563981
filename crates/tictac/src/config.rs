//! Settings loaded from `tictac.toml`.

use std::path::{Path, PathBuf};

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tictac_core::Difficulty;
use tracing::{debug, info, instrument};

use crate::tui::ThemeKind;

/// Application settings.
///
/// Every field has a default, so an empty or missing file is valid.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Scoreboard JSON file, relative to the working directory.
    scoreboard_path: PathBuf,

    /// Where the last finished game is saved for replay.
    last_game_path: PathBuf,

    /// Log file for tracing output.
    log_file: PathBuf,

    /// Pause before the AI moves in the interactive grid, in milliseconds.
    ai_delay_ms: u64,

    /// Starting colour theme for the interactive grid.
    theme: ThemeKind,

    /// Difficulty preselected in setup dialogs.
    default_difficulty: Difficulty,

    /// Fixed seed for AI randomness. Unset means seeded from entropy.
    seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            scoreboard_path: PathBuf::from("scoreboard.json"),
            last_game_path: PathBuf::from("last_game.json"),
            log_file: PathBuf::from("tictac.log"),
            ai_delay_ms: 500,
            theme: ThemeKind::Light,
            default_difficulty: Difficulty::Random,
            seed: None,
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file. A missing file yields defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file exists but cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            debug!("No config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let settings: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(scoreboard = %settings.scoreboard_path.display(), "Config loaded successfully");
        Ok(settings)
    }

    /// Overrides the scoreboard location.
    pub fn with_scoreboard_path(mut self, path: PathBuf) -> Self {
        self.scoreboard_path = path;
        self
    }

    /// Overrides the AI seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Overrides the AI delay.
    pub fn with_ai_delay_ms(mut self, ms: u64) -> Self {
        self.ai_delay_ms = ms;
        self
    }

    /// Overrides where the last game is saved.
    pub fn with_last_game_path(mut self, path: PathBuf) -> Self {
        self.last_game_path = path;
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
