//! Interactive application state: screens, popups and the event handlers
//! that drive a [`Match`] from keys, clicks and the AI timer.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use derive_more::Display;
use rand::rngs::StdRng;
use ratatui::layout::Rect;
use strum::{EnumIter, IntoEnumIterator};
use tictac_core::{
    Board, Coord, Difficulty, GameError, GameRecord, IllegalReason, Scoreboard, ScoreboardStore,
};
use tracing::{debug, info, instrument, warn};

use super::input::move_cursor;
use super::layout::{Control, GameLayout, Hit, MenuLayout};
use super::theme::ThemeKind;
use crate::config::Settings;
use crate::features::FEATURES;
use crate::session::{Match, MatchError, rng_from};
use crate::setup::{MatchSetup, resolve_symbol};

/// Entries on the main menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum MenuEntry {
    /// Human against the AI.
    #[display("Single Player vs AI")]
    SinglePlayer,
    /// Two humans.
    #[display("Two Player (Local)")]
    TwoPlayer,
    /// Step through the last finished game.
    #[display("Replay Last Game")]
    Replay,
    /// Show the scoreboard.
    #[display("View Scoreboard")]
    Scoreboard,
    /// Show the feature list.
    #[display("View Features/Help")]
    Features,
    /// Leave.
    #[display("Exit")]
    Exit,
}

/// A modal message box. Any key or click closes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Popup {
    /// Box title.
    pub title: String,
    /// Body lines.
    pub lines: Vec<String>,
}

impl Popup {
    fn new(title: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            title: title.into(),
            lines,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SetupKind {
    VsAi,
    TwoPlayer,
}

/// The dialog sequence collecting names, symbol and difficulty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupForm {
    kind: SetupKind,
    answers: Vec<String>,
    input: String,
    notice: Option<String>,
}

impl SetupForm {
    fn new(kind: SetupKind) -> Self {
        Self {
            kind,
            answers: Vec::new(),
            input: String::new(),
            notice: None,
        }
    }

    fn prompts(&self) -> &'static [&'static str] {
        match self.kind {
            SetupKind::VsAi => &[
                "Enter your name:",
                "Choose your symbol (X/O):",
                "Select AI Difficulty: 1. Easy (Random)  2. Medium (Rule-based)  3. Hard (Minimax)",
            ],
            SetupKind::TwoPlayer => &[
                "Enter Player 1 name:",
                "Player 1, choose your symbol (X/O):",
                "Enter Player 2 name:",
            ],
        }
    }

    /// Dialog title.
    pub fn title(&self) -> &'static str {
        match self.kind {
            SetupKind::VsAi => "Single Player vs AI",
            SetupKind::TwoPlayer => "Two Player (Local)",
        }
    }

    /// The question being asked.
    pub fn prompt(&self) -> &'static str {
        let prompts = self.prompts();
        prompts[self.answers.len().min(prompts.len() - 1)]
    }

    /// Text typed so far.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// A note about how the previous answer was interpreted.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Accepts the typed answer. Returns the finished setup after the last
    /// question.
    fn submit(&mut self, default_difficulty: Difficulty) -> Option<Result<MatchSetup, GameError>> {
        let answer = std::mem::take(&mut self.input);
        self.notice = None;
        if self.answers.len() == 1 && resolve_symbol(&answer).defaulted {
            self.notice = Some("Invalid symbol. Defaulting to X.".to_string());
        }
        self.answers.push(answer);
        if self.answers.len() < self.prompts().len() {
            return None;
        }

        let mark = resolve_symbol(&self.answers[1]).mark;
        Some(match self.kind {
            SetupKind::VsAi => {
                let difficulty =
                    Difficulty::from_choice(&self.answers[2]).unwrap_or(default_difficulty);
                MatchSetup::vs_ai(&self.answers[0], mark, difficulty)
            }
            SetupKind::TwoPlayer => {
                MatchSetup::two_player(&self.answers[0], mark, &self.answers[2])
            }
        })
    }
}

/// Step-through view of a saved game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayView {
    record: GameRecord,
    frames: Vec<Board>,
    step: usize,
}

impl ReplayView {
    /// The game being replayed.
    pub fn record(&self) -> &GameRecord {
        &self.record
    }

    /// Board after `step` moves.
    pub fn board(&self) -> &Board {
        &self.frames[self.step]
    }

    /// Moves shown so far.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Moves in the game.
    pub fn total(&self) -> usize {
        self.frames.len() - 1
    }

    fn forward(&mut self) {
        self.step = (self.step + 1).min(self.total());
    }

    fn back(&mut self) {
        self.step = self.step.saturating_sub(1);
    }
}

/// Which screen is showing.
#[derive(Debug)]
pub enum Screen {
    /// Main menu with the highlighted entry.
    Menu {
        /// Highlighted entry index.
        selected: usize,
    },
    /// Setup dialogs.
    Setup(SetupForm),
    /// A game in progress or just finished.
    Playing(Match),
    /// Replay viewer.
    Replay(ReplayView),
}

/// Interactive application state.
#[derive(Debug)]
pub struct App {
    settings: Settings,
    store: Box<dyn ScoreboardStore>,
    screen: Screen,
    popup: Option<Popup>,
    theme: ThemeKind,
    cursor: Coord,
    message: Option<String>,
    scores: Scoreboard,
    rng: Option<StdRng>,
    ai_due: Option<Instant>,
    area: Rect,
    quit: bool,
}

impl App {
    /// Creates the app on the main menu.
    #[instrument(skip_all)]
    pub fn new(settings: Settings, store: Box<dyn ScoreboardStore>) -> Self {
        let rng = rng_from(*settings.seed());
        let theme = *settings.theme();
        info!(%theme, "Interactive app created");
        Self {
            settings,
            store,
            screen: Screen::Menu { selected: 0 },
            popup: None,
            theme,
            cursor: Coord::CENTER,
            message: None,
            scores: Scoreboard::new(),
            rng: Some(rng),
            ai_due: None,
            area: Rect::default(),
            quit: false,
        }
    }

    /// The active screen.
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// The open popup, if any.
    pub fn popup(&self) -> Option<&Popup> {
        self.popup.as_ref()
    }

    /// The active theme.
    pub fn theme(&self) -> ThemeKind {
        self.theme
    }

    /// Keyboard cursor on the grid.
    pub fn cursor(&self) -> Coord {
        self.cursor
    }

    /// Feedback from the last action.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Whether the AI move is pending.
    pub fn ai_thinking(&self) -> bool {
        self.ai_due.is_some()
    }

    /// Whether the app should exit.
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Records the drawable area so clicks can be mapped to cells.
    pub fn set_area(&mut self, area: Rect) {
        self.area = area;
    }

    /// Score summary for the players of the current match.
    pub fn score_line(&self) -> String {
        let Screen::Playing(game) = &self.screen else {
            return String::new();
        };
        game.state()
            .players()
            .iter()
            .map(|p| {
                let record = self.scores.get(p.name()).copied().unwrap_or_default();
                format!("{}: {}", p.name(), record)
            })
            .collect::<Vec<_>>()
            .join("   ")
    }

    /// Handles a key press.
    #[instrument(skip(self), fields(code = ?key.code))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }
        if self.popup.take().is_some() {
            debug!("Popup dismissed");
            return;
        }
        match &self.screen {
            Screen::Menu { .. } => self.menu_key(key.code),
            Screen::Setup(_) => self.setup_key(key.code),
            Screen::Playing(_) => self.playing_key(key.code),
            Screen::Replay(_) => self.replay_key(key.code),
        }
    }

    /// Handles a mouse event. Only left clicks do anything.
    #[instrument(skip(self), fields(column = mouse.column, row = mouse.row))]
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        if self.popup.take().is_some() {
            return;
        }
        match &mut self.screen {
            Screen::Menu { selected } => {
                let layout = MenuLayout::compute(self.area, MenuEntry::iter().count());
                if let Some(i) = layout.hit_test(mouse.column, mouse.row) {
                    *selected = i;
                    self.activate_selected();
                }
            }
            Screen::Playing(_) => {
                match GameLayout::compute(self.area).hit_test(mouse.column, mouse.row) {
                    Some(Hit::Cell(coord)) => {
                        self.cursor = coord;
                        self.place(coord);
                    }
                    Some(Hit::Control(control)) => self.control(control),
                    None => {}
                }
            }
            Screen::Replay(view) => view.forward(),
            Screen::Setup(_) => {}
        }
    }

    /// Plays the AI move once its delay has passed.
    pub fn tick(&mut self, now: Instant) {
        let Some(due) = self.ai_due else {
            return;
        };
        if now < due {
            return;
        }
        self.ai_due = None;
        let Screen::Playing(game) = &mut self.screen else {
            return;
        };
        match game.play_automated() {
            Ok(Some(coord)) => {
                let ai = &game.state().players()[1];
                self.message = Some(format!("{} chose position {}", ai.name(), coord.key()));
            }
            Ok(None) => {}
            Err(e) => {
                warn!(error = %e, "AI move failed");
                self.message = Some(e.to_string());
            }
        }
        self.after_move();
    }

    fn menu_key(&mut self, code: KeyCode) {
        let count = MenuEntry::iter().count();
        let Screen::Menu { selected } = &mut self.screen else {
            return;
        };
        match code {
            KeyCode::Up => *selected = selected.checked_sub(1).unwrap_or(count - 1),
            KeyCode::Down => *selected = (*selected + 1) % count,
            KeyCode::Enter => self.activate_selected(),
            KeyCode::Char(c @ '1'..='6') => {
                *selected = c as usize - '1' as usize;
                self.activate_selected();
            }
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => self.quit = true,
            _ => {}
        }
    }

    fn activate_selected(&mut self) {
        let Screen::Menu { selected } = self.screen else {
            return;
        };
        let Some(entry) = MenuEntry::iter().nth(selected) else {
            return;
        };
        info!(%entry, "Menu entry chosen");
        match entry {
            MenuEntry::SinglePlayer => self.screen = Screen::Setup(SetupForm::new(SetupKind::VsAi)),
            MenuEntry::TwoPlayer => {
                self.screen = Screen::Setup(SetupForm::new(SetupKind::TwoPlayer))
            }
            MenuEntry::Replay => self.open_replay(),
            MenuEntry::Scoreboard => self.show_scoreboard(),
            MenuEntry::Features => {
                self.popup = Some(Popup::new(
                    "Features",
                    FEATURES.iter().map(|f| format!("- {}", f)).collect(),
                ));
            }
            MenuEntry::Exit => self.quit = true,
        }
    }

    fn setup_key(&mut self, code: KeyCode) {
        let default_difficulty = *self.settings.default_difficulty();
        let Screen::Setup(form) = &mut self.screen else {
            return;
        };
        match code {
            KeyCode::Char(c) => form.input.push(c),
            KeyCode::Backspace => {
                form.input.pop();
            }
            KeyCode::Esc => self.screen = Screen::Menu { selected: 0 },
            KeyCode::Enter => match form.submit(default_difficulty) {
                None => {}
                Some(Ok(setup)) => self.start_match(setup),
                Some(Err(e)) => {
                    warn!(error = %e, "Setup rejected");
                    self.screen = Screen::Menu { selected: 0 };
                    self.popup = Some(Popup::new("Setup", vec![e.to_string()]));
                }
            },
            _ => {}
        }
    }

    #[instrument(skip_all)]
    fn start_match(&mut self, setup: MatchSetup) {
        let rng = self.rng.take().unwrap_or_else(|| rng_from(None));
        match Match::new(setup, rng) {
            Ok(game) => {
                self.screen = Screen::Playing(game);
                self.cursor = Coord::CENTER;
                self.message = None;
                self.refresh_scores();
                self.schedule_ai();
            }
            Err(e) => {
                warn!(error = %e, "Could not start match");
                self.screen = Screen::Menu { selected: 0 };
                self.popup = Some(Popup::new("Setup", vec![e.to_string()]));
            }
        }
    }

    fn playing_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char(c @ '1'..='9') => {
                if let Some(coord) = Coord::from_key(c as usize - '0' as usize) {
                    self.cursor = coord;
                    self.place(coord);
                }
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, code);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.place(self.cursor),
            KeyCode::Char('u') => self.control(Control::Undo),
            KeyCode::Char('r') => self.control(Control::Redo),
            KeyCode::Char('n') => self.control(Control::Restart),
            KeyCode::Char('m') | KeyCode::Esc => self.control(Control::Menu),
            KeyCode::Char('t') => self.control(Control::Theme),
            KeyCode::Char('q') | KeyCode::Char('Q') => self.quit = true,
            _ => {}
        }
    }

    fn replay_key(&mut self, code: KeyCode) {
        let Screen::Replay(view) = &mut self.screen else {
            return;
        };
        match code {
            KeyCode::Right | KeyCode::Enter | KeyCode::Char(' ') => view.forward(),
            KeyCode::Left | KeyCode::Backspace => view.back(),
            KeyCode::Esc | KeyCode::Char('m') => self.to_menu(),
            KeyCode::Char('t') => self.theme = self.theme.toggle(),
            KeyCode::Char('q') | KeyCode::Char('Q') => self.quit = true,
            _ => {}
        }
    }

    fn place(&mut self, coord: Coord) {
        let Screen::Playing(game) = &mut self.screen else {
            return;
        };
        match game.play(coord) {
            Ok(_) => {
                self.message = None;
                self.after_move();
            }
            Err(MatchError::Game(GameError::IllegalMove {
                reason: IllegalReason::Occupied,
                ..
            })) => self.message = Some("Position already taken.".to_string()),
            Err(e) => {
                debug!(error = %e, "Move refused");
                self.message = Some(e.to_string());
            }
        }
    }

    #[instrument(skip(self))]
    fn control(&mut self, control: Control) {
        match control {
            Control::Theme => {
                self.theme = self.theme.toggle();
                info!(theme = %self.theme, "Theme toggled");
            }
            Control::Menu => self.to_menu(),
            Control::Restart => {
                let Screen::Playing(game) = &mut self.screen else {
                    return;
                };
                if let Err(e) = game.restart() {
                    warn!(error = %e, "Restart failed");
                }
                self.ai_due = None;
                self.cursor = Coord::CENTER;
                self.message = None;
                self.schedule_ai();
            }
            Control::Undo | Control::Redo => {
                let Screen::Playing(game) = &mut self.screen else {
                    return;
                };
                let result = if control == Control::Undo {
                    game.undo()
                } else {
                    game.redo()
                };
                self.message = Some(match result {
                    Ok(()) if control == Control::Undo => "Move undone.".to_string(),
                    Ok(()) => "Move redone.".to_string(),
                    Err(MatchError::Game(GameError::NothingToUndo)) => "Nothing to undo.".to_string(),
                    Err(MatchError::Game(GameError::NothingToRedo)) => "Nothing to redo.".to_string(),
                    Err(e) => e.to_string(),
                });
                self.ai_due = None;
                self.after_move();
            }
        }
    }

    /// Settles a finished game, otherwise schedules the AI if it is to move.
    fn after_move(&mut self) {
        let Screen::Playing(game) = &mut self.screen else {
            return;
        };
        if !game.state().is_terminal() {
            self.schedule_ai();
            return;
        }

        let headline = game.headline();
        match game.settle(self.store.as_mut(), self.settings.last_game_path()) {
            Ok(Some(result)) => {
                info!(?result, "Game finished");
                let banner = match result {
                    tictac_core::MatchResult::Tie => format!("🤝 {} 🤝", headline),
                    tictac_core::MatchResult::Winner(_) => format!("🎉 {} 🎉", headline),
                };
                self.popup = Some(Popup::new("Game Over", vec![banner]));
            }
            Ok(None) => {}
            Err(e) => {
                warn!(error = %e, "Failed to record result");
                self.popup = Some(Popup::new(
                    "Game Over",
                    vec![headline, format!("Could not save the scoreboard: {}", e.message)],
                ));
            }
        }
        self.refresh_scores();
    }

    fn schedule_ai(&mut self) {
        let Screen::Playing(game) = &self.screen else {
            return;
        };
        self.ai_due = game
            .awaiting_ai()
            .then(|| Instant::now() + Duration::from_millis(*self.settings.ai_delay_ms()));
    }

    fn to_menu(&mut self) {
        let previous = std::mem::replace(&mut self.screen, Screen::Menu { selected: 0 });
        if let Screen::Playing(game) = previous {
            self.rng = Some(game.into_rng());
        }
        self.ai_due = None;
        self.message = None;
        debug!("Returned to menu");
    }

    fn refresh_scores(&mut self) {
        match self.store.load() {
            Ok(scores) => self.scores = scores,
            Err(e) => warn!(error = %e, "Failed to load scoreboard"),
        }
    }

    fn show_scoreboard(&mut self) {
        self.refresh_scores();
        let lines = if self.scores.is_empty() {
            vec!["No games played yet.".to_string()]
        } else {
            self.scores
                .iter()
                .map(|(name, record)| format!("{}: {}", name, record))
                .collect()
        };
        self.popup = Some(Popup::new("Scoreboard", lines));
    }

    fn open_replay(&mut self) {
        let record = match GameRecord::load(self.settings.last_game_path()) {
            Ok(Some(record)) => record,
            Ok(None) => {
                self.popup = Some(Popup::new(
                    "Replay",
                    vec!["No finished game to replay yet.".to_string()],
                ));
                return;
            }
            Err(e) => {
                warn!(error = %e, "Failed to load last game");
                self.popup = Some(Popup::new("Replay", vec![e.message]));
                return;
            }
        };
        match record.replay() {
            Ok(frames) => {
                info!(moves = frames.len() - 1, "Replay opened");
                self.screen = Screen::Replay(ReplayView {
                    record,
                    frames,
                    step: 0,
                });
            }
            Err(e) => {
                warn!(error = %e, "Saved game is not replayable");
                self.popup = Some(Popup::new("Replay", vec![e.to_string()]));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use tictac_core::{GameStatus, Mark, MemoryStore};

    fn app(dir: &tempfile::TempDir) -> App {
        let settings = Settings::default()
            .with_ai_delay_ms(0)
            .with_seed(7)
            .with_last_game_path(dir.path().join("last_game.json"));
        let mut app = App::new(settings, Box::new(MemoryStore::new()));
        app.set_area(Rect::new(0, 0, 80, 30));
        app
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_line(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    fn click(app: &mut App, column: u16, row: u16) {
        app.handle_mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        });
    }

    fn game(app: &App) -> &Match {
        match app.screen() {
            Screen::Playing(game) => game,
            other => panic!("expected a game, got {other:?}"),
        }
    }

    fn start_two_player(app: &mut App) {
        press(app, KeyCode::Char('2'));
        type_line(app, "Ada");
        type_line(app, "x");
        type_line(app, "Bob");
    }

    #[test]
    fn test_two_player_win_via_keys() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut app = app(&dir);
        start_two_player(&mut app);
        assert_eq!(game(&app).headline(), "Ada's turn (X)");

        for k in ['1', '4', '2', '5', '3'] {
            press(&mut app, KeyCode::Char(k));
        }
        assert!(matches!(game(&app).state().status(), GameStatus::Won { mark: Mark::X, .. }));
        let popup = app.popup().expect("game over popup");
        assert!(popup.lines[0].contains("Ada (X) wins!"));
        assert!(app.score_line().contains("Ada: 1 Wins, 0 Losses, 0 Ties"));
        assert!(dir.path().join("last_game.json").exists());
    }

    #[test]
    fn test_occupied_cell_message() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut app = app(&dir);
        start_two_player(&mut app);
        press(&mut app, KeyCode::Char('5'));
        press(&mut app, KeyCode::Char('5'));
        assert_eq!(app.message(), Some("Position already taken."));
        assert_eq!(game(&app).state().turns_played(), 1);
    }

    #[test]
    fn test_invalid_symbol_notice() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut app = app(&dir);
        press(&mut app, KeyCode::Char('2'));
        type_line(&mut app, "Ada");
        type_line(&mut app, "z");
        let Screen::Setup(form) = app.screen() else {
            panic!("expected setup");
        };
        assert_eq!(form.notice(), Some("Invalid symbol. Defaulting to X."));
        type_line(&mut app, "Bob");
        assert_eq!(*game(&app).state().players()[0].mark(), Mark::X);
    }

    #[test]
    fn test_ai_moves_on_tick() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut app = app(&dir);
        press(&mut app, KeyCode::Char('1'));
        type_line(&mut app, "Ada");
        type_line(&mut app, "o");
        type_line(&mut app, "3");

        press(&mut app, KeyCode::Char('5'));
        assert!(app.ai_thinking());
        assert_eq!(game(&app).state().turns_played(), 1);

        app.tick(Instant::now());
        assert!(!app.ai_thinking());
        assert_eq!(game(&app).state().turns_played(), 2);
        assert_eq!(game(&app).state().current_index(), 0);

        press(&mut app, KeyCode::Char('u'));
        assert_eq!(app.message(), Some("Move undone."));
        assert_eq!(game(&app).state().turns_played(), 0);
    }

    #[test]
    fn test_click_places_mark() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut app = app(&dir);
        start_two_player(&mut app);

        let layout = GameLayout::compute(Rect::new(0, 0, 80, 30));
        let target = Coord::new(2, 0).expect("coord");
        let cell = layout.cells[target.index()];
        click(&mut app, cell.x + 1, cell.y + 1);
        assert!(!game(&app).state().board().is_empty(target));

        let (_, theme) = layout.controls[4];
        click(&mut app, theme.x + 1, theme.y + 1);
        assert_eq!(app.theme(), ThemeKind::Dark);
    }

    #[test]
    fn test_nothing_to_undo() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut app = app(&dir);
        start_two_player(&mut app);
        press(&mut app, KeyCode::Char('u'));
        assert_eq!(app.message(), Some("Nothing to undo."));
    }

    #[test]
    fn test_menu_popups() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut app = app(&dir);

        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.popup().expect("popup").lines, vec!["No games played yet."]);
        press(&mut app, KeyCode::Enter);
        assert!(app.popup().is_none());

        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.popup().expect("popup").title, "Replay");
        press(&mut app, KeyCode::Enter);

        press(&mut app, KeyCode::Char('5'));
        assert_eq!(app.popup().expect("popup").lines.len(), FEATURES.len());
    }

    #[test]
    fn test_replay_after_game() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut app = app(&dir);
        start_two_player(&mut app);
        for k in ['1', '4', '2', '5', '3'] {
            press(&mut app, KeyCode::Char(k));
        }
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('m'));
        press(&mut app, KeyCode::Char('3'));

        let Screen::Replay(view) = app.screen() else {
            panic!("expected replay");
        };
        assert_eq!(view.total(), 5);
        assert_eq!(view.step(), 0);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        let Screen::Replay(view) = app.screen() else {
            panic!("expected replay");
        };
        assert_eq!(view.board().occupied(), 2);
    }

    #[test]
    fn test_menu_navigation_and_quit() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut app = app(&dir);
        press(&mut app, KeyCode::Up);
        assert!(matches!(app.screen(), Screen::Menu { selected: 5 }));
        press(&mut app, KeyCode::Enter);
        assert!(app.should_quit());
    }
}
