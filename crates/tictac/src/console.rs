//! Text console front-end: a blocking prompt loop over a [`Match`].

use std::io::{BufRead, Write};
use std::path::PathBuf;

use rand::rngs::StdRng;
use tictac_core::{Difficulty, GameError, GameRecord, IllegalReason, ScoreboardStore};
use tracing::{debug, error, info, instrument, warn};

use crate::features::FEATURES;
use crate::input::{Command, parse_command};
use crate::session::{Match, MatchError};
use crate::setup::{MatchSetup, resolve_symbol};

/// Whether the caller should keep looping or shut down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Console driver reading from `R` and writing to `W`.
pub struct Console<R, W, S> {
    input: R,
    output: W,
    store: S,
    last_game_path: PathBuf,
    rng: Option<StdRng>,
}

impl<R: BufRead, W: Write, S: ScoreboardStore> Console<R, W, S> {
    /// Creates a console driver.
    pub fn new(input: R, output: W, store: S, last_game_path: PathBuf, rng: StdRng) -> Self {
        Self {
            input,
            output,
            store,
            last_game_path,
            rng: Some(rng),
        }
    }

    /// The scoreboard store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Runs the main menu until the player exits or input ends.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> anyhow::Result<()> {
        info!("Starting console front-end");
        loop {
            writeln!(self.output, "\n==== TIC TAC TOE ====")?;
            writeln!(self.output, "1. Start Game")?;
            writeln!(self.output, "2. Replay Last Game")?;
            writeln!(self.output, "3. View Scoreboard")?;
            writeln!(self.output, "4. View Features/Help")?;
            writeln!(self.output, "5. Exit")?;
            let Some(choice) = self.prompt("Select an option (1-5): ")? else {
                break;
            };
            let flow = match choice.trim() {
                "1" => self.start_game()?,
                "2" => self.replay_last_game()?,
                "3" => {
                    self.print_scoreboard()?;
                    Flow::Continue
                }
                "4" => {
                    self.print_features()?;
                    Flow::Continue
                }
                "5" => Flow::Exit,
                _ => {
                    writeln!(self.output, "Invalid choice. Please enter a valid option.")?;
                    Flow::Continue
                }
            };
            if flow == Flow::Exit {
                break;
            }
        }
        writeln!(self.output, "Goodbye!")?;
        info!("Console front-end finished");
        Ok(())
    }

    /// Prints `message` and reads a line. `None` means input is exhausted.
    fn prompt(&mut self, message: &str) -> std::io::Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("Input closed");
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn prompt_symbol(&mut self, message: &str) -> std::io::Result<Option<tictac_core::Mark>> {
        let Some(answer) = self.prompt(message)? else {
            return Ok(None);
        };
        let choice = resolve_symbol(&answer);
        if choice.defaulted {
            writeln!(self.output, "Invalid symbol. Defaulting to X.")?;
        }
        Ok(Some(choice.mark))
    }

    fn prompt_difficulty(&mut self) -> std::io::Result<Option<Difficulty>> {
        writeln!(self.output, "Select AI Difficulty:")?;
        for (i, d) in [Difficulty::Random, Difficulty::RuleBased, Difficulty::Minimax]
            .iter()
            .enumerate()
        {
            writeln!(self.output, "{}. {}", i + 1, d.label())?;
        }
        loop {
            let Some(answer) = self.prompt("Enter 1, 2, or 3: ")? else {
                return Ok(None);
            };
            if let Some(d) = Difficulty::from_choice(&answer) {
                return Ok(Some(d));
            }
            writeln!(self.output, "Invalid choice. Please enter 1, 2, or 3.")?;
        }
    }

    /// Asks for mode, names and symbols, then plays.
    fn start_game(&mut self) -> anyhow::Result<Flow> {
        writeln!(self.output, "Console Tic Tac Toe!")?;
        writeln!(self.output, "1. Single Player vs AI")?;
        writeln!(self.output, "2. Two Player (Local)")?;
        let setup = loop {
            let Some(choice) = self.prompt("Select game mode (1 or 2): ")? else {
                return Ok(Flow::Exit);
            };
            match choice.trim() {
                "1" => {
                    let Some(name) = self.prompt("Enter your name: ")? else {
                        return Ok(Flow::Exit);
                    };
                    let Some(mark) = self.prompt_symbol("Choose your symbol (X/O): ")? else {
                        return Ok(Flow::Exit);
                    };
                    let Some(difficulty) = self.prompt_difficulty()? else {
                        return Ok(Flow::Exit);
                    };
                    break MatchSetup::vs_ai(&name, mark, difficulty)?;
                }
                "2" => {
                    let Some(first) = self.prompt("Player 1, enter your name: ")? else {
                        return Ok(Flow::Exit);
                    };
                    let Some(mark) = self.prompt_symbol("Player 1, choose your symbol (X/O): ")?
                    else {
                        return Ok(Flow::Exit);
                    };
                    let Some(second) = self.prompt("Player 2, enter your name: ")? else {
                        return Ok(Flow::Exit);
                    };
                    break MatchSetup::two_player(&first, mark, &second)?;
                }
                _ => writeln!(self.output, "Invalid choice. Please enter 1 or 2.")?,
            }
        };

        let rng = self.rng.take().unwrap_or_else(|| crate::session::rng_from(None));
        let mut game = Match::new(setup, rng)?;
        let flow = self.play(&mut game);
        self.rng = Some(game.into_rng());
        flow
    }

    /// The read-evaluate loop for one game.
    #[instrument(skip_all)]
    fn play(&mut self, game: &mut Match) -> anyhow::Result<Flow> {
        loop {
            writeln!(self.output, "{}\n", game.state().board().display())?;

            if game.awaiting_ai() {
                if let Some(coord) = game.play_automated()? {
                    let ai = &game.state().players()[1];
                    writeln!(self.output, "{} ({}) chooses position {}", ai.name(), ai.mark(), coord.key())?;
                }
            } else {
                let player = game.state().current_player().clone();
                let message = format!(
                    "{} ({}), enter position 1-9, 'undo', 'redo', or 'q' to quit: ",
                    player.name(),
                    player.mark()
                );
                loop {
                    let Some(answer) = self.prompt(&message)? else {
                        return Ok(Flow::Exit);
                    };
                    let command = match parse_command(&answer) {
                        Ok(command) => command,
                        Err(e) => {
                            writeln!(self.output, "{}", e)?;
                            continue;
                        }
                    };
                    match command {
                        Command::Quit => {
                            writeln!(self.output, "Thanks for playing!")?;
                            return Ok(Flow::Continue);
                        }
                        Command::Undo => {
                            match game.undo() {
                                Ok(()) => writeln!(self.output, "Move undone.")?,
                                Err(_) => writeln!(self.output, "Nothing to undo.")?,
                            }
                            break;
                        }
                        Command::Redo => {
                            match game.redo() {
                                Ok(()) => writeln!(self.output, "Move redone.")?,
                                Err(_) => writeln!(self.output, "Nothing to redo.")?,
                            }
                            break;
                        }
                        Command::Place(coord) => match game.play(coord) {
                            Ok(_) => break,
                            Err(MatchError::Game(GameError::IllegalMove {
                                reason: IllegalReason::Occupied,
                                ..
                            })) => writeln!(self.output, "Position already taken.")?,
                            Err(e) => writeln!(self.output, "{}", e)?,
                        },
                    }
                }
            }

            if game.state().is_terminal() {
                writeln!(self.output, "{}\n", game.state().board().display())?;
                writeln!(self.output, "{}", game.headline())?;
                if let Err(e) = game.settle(&mut self.store, &self.last_game_path) {
                    error!(error = %e, "Failed to record result");
                    writeln!(self.output, "Could not save the scoreboard: {}", e.message)?;
                }
                return Ok(Flow::Continue);
            }
        }
    }

    fn replay_last_game(&mut self) -> anyhow::Result<Flow> {
        let record = match GameRecord::load(&self.last_game_path) {
            Ok(Some(record)) => record,
            Ok(None) => {
                writeln!(self.output, "No finished game to replay yet.")?;
                return Ok(Flow::Continue);
            }
            Err(e) => {
                warn!(error = %e, "Failed to load last game");
                writeln!(self.output, "The last game could not be loaded.")?;
                return Ok(Flow::Continue);
            }
        };
        let frames = match record.replay() {
            Ok(frames) => frames,
            Err(e) => {
                warn!(error = %e, "Saved game is not replayable");
                writeln!(self.output, "The last game could not be replayed.")?;
                return Ok(Flow::Continue);
            }
        };

        let [first, second] = record.players();
        writeln!(
            self.output,
            "Replaying {} ({}) vs {} ({})",
            first.name(),
            first.mark(),
            second.name(),
            second.mark()
        )?;
        let total = frames.len() - 1;
        for (i, frame) in frames.iter().enumerate().skip(1) {
            writeln!(self.output, "\nMove {} of {}:", i, total)?;
            writeln!(self.output, "{}", frame.display())?;
            if i < total {
                let Some(answer) = self.prompt("Press Enter for the next move, or 'q' to stop: ")?
                else {
                    return Ok(Flow::Exit);
                };
                if answer.trim().eq_ignore_ascii_case("q") {
                    break;
                }
            }
        }
        if let Ok(state) = record.final_state() {
            let outcome = match state.status() {
                tictac_core::GameStatus::Won { mark, .. } => state
                    .player_with(mark)
                    .map(|p| format!("{} ({}) won.", p.name(), mark))
                    .unwrap_or_default(),
                tictac_core::GameStatus::Tied => "It was a tie.".to_string(),
                tictac_core::GameStatus::InProgress => String::new(),
            };
            if !outcome.is_empty() {
                writeln!(self.output, "{}", outcome)?;
            }
        }
        Ok(Flow::Continue)
    }

    fn print_scoreboard(&mut self) -> anyhow::Result<()> {
        let board = self.store.load()?;
        writeln!(self.output, "\n==== SCOREBOARD ====")?;
        if board.is_empty() {
            writeln!(self.output, "No games played yet.")?;
            return Ok(());
        }
        for (name, record) in &board {
            writeln!(self.output, "{}: {}", name, record)?;
        }
        writeln!(self.output, "====================\n")?;
        Ok(())
    }

    fn print_features(&mut self) -> std::io::Result<()> {
        writeln!(self.output, "\nFeatures:")?;
        for feature in FEATURES {
            writeln!(self.output, "- {}", feature)?;
        }
        Ok(())
    }
}

/// Front-end picked at the startup prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontEnd {
    /// Text console.
    Console,
    /// Interactive grid.
    Interactive,
}

/// Asks which front-end to run. `None` if input ends first.
pub fn choose_front_end(mut input: impl BufRead, mut output: impl Write) -> std::io::Result<Option<FrontEnd>> {
    writeln!(output, "Welcome to Tic Tac Toe!")?;
    writeln!(output, "\nFeatures:")?;
    for feature in FEATURES {
        writeln!(output, "- {}", feature)?;
    }
    writeln!(output, "\n1. Console Version")?;
    writeln!(output, "2. Interactive Version")?;
    loop {
        write!(output, "Select mode (1 for Console, 2 for Interactive): ")?;
        output.flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        match line.trim() {
            "1" => return Ok(Some(FrontEnd::Console)),
            "2" => return Ok(Some(FrontEnd::Interactive)),
            _ => writeln!(output, "Invalid choice. Please enter a valid option.")?,
        }
    }
}
