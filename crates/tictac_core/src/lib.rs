//! Tic-tac-toe game core.
//!
//! Everything a front-end needs to run a game, with no I/O beyond the
//! scoreboard and record files:
//!
//! - **GameState**: board, turn order, undo/redo history and win/tie status
//! - **Rules**: the eight winning lines and tie detection
//! - **Policies**: move selection for automated players
//! - **Scoreboard**: per-name win/loss/tie counts behind a store trait
//! - **Records**: finished games for replay
//!
//! # Example
//!
//! ```
//! use tictac_core::{Coord, GameState, GameStatus, Mark, Player};
//!
//! # fn main() -> Result<(), tictac_core::GameError> {
//! let mut game = GameState::new(
//!     Player::human("Ada", Mark::X)?,
//!     Player::human("Bob", Mark::O)?,
//! )?;
//! game.apply_move(1, 1)?;
//! game.undo()?;
//! assert_eq!(game.turns_played(), 0);
//! game.redo()?;
//! assert_eq!(game.status(), GameStatus::InProgress);
//! assert_eq!(game.board().get(Coord::new(1, 1).unwrap()), tictac_core::Square::Occupied(Mark::X));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod error;
mod game;
mod history;
mod policy;
mod record;
pub mod rules;
mod scoreboard;
mod types;

pub use action::Move;
pub use error::{GameError, IllegalReason, StoreError};
pub use game::{GameState, GameStatus};
pub use history::MoveHistory;
pub use policy::{Difficulty, MinimaxPolicy, MovePolicy, RandomPolicy, RuleBasedPolicy};
pub use record::GameRecord;
pub use rules::Line;
pub use scoreboard::{
    JsonFileStore, MatchResult, MemoryStore, ScoreRecord, Scoreboard, ScoreboardStore,
    apply_result,
};
pub use types::{Board, Coord, Mark, Player, Square};
