//! Command-line interface for tictac.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Tic Tac Toe with undo/redo, an AI opponent and a persistent scoreboard
#[derive(Parser, Debug)]
#[command(name = "tictac")]
#[command(about = "Console and interactive tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML settings file
    #[arg(long, global = true, default_value = "tictac.toml")]
    pub config: PathBuf,

    /// Scoreboard JSON file (overrides the settings file)
    #[arg(long, global = true)]
    pub scoreboard: Option<PathBuf>,

    /// Seed for AI randomness (overrides the settings file)
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Front-end to run. Prompts for one when omitted.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play in the text console
    Console,

    /// Play on the interactive grid (mouse and keyboard)
    Tui,

    /// Print the scoreboard and exit
    Scoreboard,

    /// Print the feature list and exit
    Features,
}
