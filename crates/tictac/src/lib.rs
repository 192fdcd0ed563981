//! Tic Tac Toe front-ends.
//!
//! Game rules, move policies and the scoreboard live in [`tictac_core`].
//! This crate adds what the two front-ends share around them:
//!
//! - **Config**: [`Settings`] loaded from TOML
//! - **Setup**: turning names and symbol answers into players
//! - **Session**: a [`Match`] that drives the AI and records the result once
//! - **Console**: a prompt loop over any reader and writer
//! - **TUI**: a mouse and keyboard grid drawn with ratatui
//!
//! # Example
//!
//! ```
//! use tictac::{Match, MatchSetup, rng_from};
//! use tictac_core::{Coord, Mark};
//!
//! let setup = MatchSetup::two_player("Ada", Mark::X, "Bob").unwrap();
//! let mut game = Match::new(setup, rng_from(Some(1))).unwrap();
//! game.play(Coord::CENTER).unwrap();
//! assert_eq!(game.headline(), "Bob's turn (O)");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod console;
mod features;
mod input;
mod session;
mod setup;

pub mod cli;
pub mod tui;

pub use config::{ConfigError, Settings};
pub use console::{Console, FrontEnd, choose_front_end};
pub use features::FEATURES;
pub use input::{Command, InputError, parse_command};
pub use session::{Match, MatchError, rng_from};
pub use setup::{AI_NAME, MatchSetup, Mode, SymbolChoice, resolve_name, resolve_symbol};
