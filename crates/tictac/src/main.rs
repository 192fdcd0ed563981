//! Tic Tac Toe - unified CLI
//!
//! Console or interactive play, plus scoreboard and feature printouts.

#![warn(missing_docs)]

use std::io;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tictac::cli::{Cli, Command};
use tictac::{Console, FEATURES, FrontEnd, Settings, choose_front_end, rng_from, tui};
use tictac_core::{JsonFileStore, ScoreboardStore};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut settings = Settings::from_file(&cli.config)?;
    if let Some(path) = cli.scoreboard {
        settings = settings.with_scoreboard_path(path);
    }
    if let Some(seed) = cli.seed {
        settings = settings.with_seed(seed);
    }

    init_tracing(settings.log_file())?;
    info!(config = %cli.config.display(), "Starting tictac");

    let command = match cli.command {
        Some(command) => command,
        None => match choose_front_end(io::stdin().lock(), io::stdout())? {
            Some(FrontEnd::Console) => Command::Console,
            Some(FrontEnd::Interactive) => Command::Tui,
            None => return Ok(()),
        },
    };

    let store = JsonFileStore::new(settings.scoreboard_path().clone());
    match command {
        Command::Console => run_console(settings, store),
        Command::Tui => tui::run_tui(settings, Box::new(store)),
        Command::Scoreboard => print_scoreboard(&store),
        Command::Features => {
            println!("Features:");
            for feature in FEATURES {
                println!("- {}", feature);
            }
            Ok(())
        }
    }
}

/// Logs go to a file so neither front-end's screen is disturbed.
fn init_tracing(log_file: &Path) -> Result<()> {
    let file = std::fs::File::create(log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

/// Run the text console
#[instrument(skip_all)]
fn run_console(settings: Settings, store: JsonFileStore) -> Result<()> {
    let stdin = io::stdin();
    let mut console = Console::new(
        stdin.lock(),
        io::stdout(),
        store,
        settings.last_game_path().clone(),
        rng_from(*settings.seed()),
    );
    console.run()
}

/// Print the scoreboard once
#[instrument(skip_all, fields(path = %store.path().display()))]
fn print_scoreboard(store: &JsonFileStore) -> Result<()> {
    let board = store.load()?;
    println!("==== SCOREBOARD ====");
    if board.is_empty() {
        println!("No games played yet.");
    }
    for (name, record) in &board {
        println!("{}: {}", name, record);
    }
    Ok(())
}
