//! Interactive terminal front-end: a clickable grid drawn with ratatui.

mod app;
mod input;
mod layout;
mod theme;
mod ui;

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use tictac_core::ScoreboardStore;
use tracing::{error, info, instrument};

pub use app::{App, MenuEntry, Popup, ReplayView, Screen, SetupForm};
pub use layout::{Control, GameLayout, Hit, MenuLayout};
pub use theme::{Palette, ThemeKind};

use crate::config::Settings;

/// Runs the interactive front-end until the player quits.
#[instrument(skip_all)]
pub fn run_tui(settings: Settings, store: Box<dyn ScoreboardStore>) -> Result<()> {
    info!("Starting interactive front-end");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(settings, store);
    let res = run_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Interactive loop error");
    }
    info!("Interactive front-end finished");
    res
}

/// Draw, poll, dispatch until the app asks to quit.
fn run_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| {
            app.set_area(f.area());
            ui::draw(f, app);
        })?;

        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {}
            }
        }
        app.tick(Instant::now());

        if app.should_quit() {
            return Ok(());
        }
    }
}
