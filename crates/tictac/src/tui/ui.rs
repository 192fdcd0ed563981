//! Stateless rendering of the interactive app.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use strum::IntoEnumIterator;
use tictac_core::{Board, Coord, GameStatus, Square, rules};

use super::app::{App, MenuEntry, Popup, ReplayView, Screen, SetupForm};
use super::layout::{GameLayout, MenuLayout, center_rect};
use super::theme::Palette;
use crate::session::Match;

/// Draws the whole app.
pub fn draw(frame: &mut Frame, app: &App) {
    let palette = app.theme().palette();
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::new().bg(palette.bg).fg(palette.fg)),
        area,
    );

    match app.screen() {
        Screen::Menu { selected } => draw_menu(frame, area, *selected, &palette),
        Screen::Setup(form) => {
            draw_menu(frame, area, 0, &palette);
            draw_setup(frame, area, form, &palette);
        }
        Screen::Playing(game) => draw_game(frame, area, app, game, &palette),
        Screen::Replay(view) => draw_replay(frame, area, view, &palette),
    }

    if let Some(popup) = app.popup() {
        draw_popup(frame, area, popup, &palette);
    }
}

fn title_bar(text: &str, palette: &Palette) -> Paragraph<'static> {
    Paragraph::new(text.to_string())
        .style(Style::new().fg(palette.fg).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::new().fg(palette.border)),
        )
}

fn help_line(text: &str, palette: &Palette) -> Paragraph<'static> {
    Paragraph::new(text.to_string())
        .style(Style::new().fg(palette.border))
        .alignment(Alignment::Center)
}

fn draw_menu(frame: &mut Frame, area: Rect, selected: usize, palette: &Palette) {
    let layout = MenuLayout::compute(area, MenuEntry::iter().count());
    frame.render_widget(title_bar("Tic Tac Toe", palette), layout.title);

    for (i, (entry, rect)) in MenuEntry::iter().zip(layout.items.iter()).enumerate() {
        let fill = if i == selected {
            palette.active
        } else {
            palette.button
        };
        let button = Paragraph::new(format!("{}. {}", i + 1, entry))
            .alignment(Alignment::Center)
            .style(Style::new().bg(fill).fg(palette.fg))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::new().fg(palette.border)),
            );
        frame.render_widget(button, *rect);
    }

    frame.render_widget(
        help_line("↑↓: Navigate | Enter/click: Select | 1-6: Shortcut | q: Quit", palette),
        layout.help,
    );
}

fn draw_setup(frame: &mut Frame, area: Rect, form: &SetupForm, palette: &Palette) {
    let rect = center_rect(area, 60, 9);
    let mut lines = vec![Line::from(form.prompt()), Line::from("")];
    lines.push(Line::from(format!("> {}_", form.input())));
    if let Some(notice) = form.notice() {
        lines.push(Line::from(""));
        lines.push(Line::from(notice.to_string()).style(Style::new().fg(palette.active)));
    }

    let dialog = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .style(Style::new().bg(palette.bg).fg(palette.fg))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(form.title())
                .title_bottom("Enter: OK | Esc: Cancel")
                .border_style(Style::new().fg(palette.border)),
        );
    frame.render_widget(Clear, rect);
    frame.render_widget(dialog, rect);
}

fn draw_game(frame: &mut Frame, area: Rect, app: &App, game: &Match, palette: &Palette) {
    let layout = GameLayout::compute(area);
    frame.render_widget(title_bar("Tic Tac Toe", palette), layout.title);

    let mut status = if app.ai_thinking() {
        "AI is thinking...".to_string()
    } else {
        game.headline()
    };
    if let Some(message) = app.message() {
        status = format!("{}  |  {}", status, message);
    }
    frame.render_widget(title_bar(&status, palette), layout.status);
    frame.render_widget(help_line(&app.score_line(), palette), layout.score);

    let highlight = match game.state().status() {
        GameStatus::Won { line, .. } => Some(line),
        _ => None,
    };
    let cursor = (!game.state().is_terminal()).then_some(app.cursor());
    draw_cells(frame, &layout, game.state().board(), highlight, cursor, palette);

    for (control, rect) in &layout.controls {
        let button = Paragraph::new(format!("{} ({})", control, control.key()))
            .alignment(Alignment::Center)
            .style(Style::new().bg(palette.button).fg(palette.fg))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::new().fg(palette.border)),
            );
        frame.render_widget(button, *rect);
    }

    frame.render_widget(
        help_line("1-9 or click: Place | ←↑→↓ + Enter: Place at cursor | q: Quit", palette),
        layout.help,
    );
}

fn draw_replay(frame: &mut Frame, area: Rect, view: &ReplayView, palette: &Palette) {
    let layout = GameLayout::compute(area);
    let [first, second] = view.record().players();
    frame.render_widget(title_bar("Replay Last Game", palette), layout.title);
    frame.render_widget(
        title_bar(&format!("Move {} of {}", view.step(), view.total()), palette),
        layout.status,
    );
    frame.render_widget(
        help_line(
            &format!(
                "{} ({}) vs {} ({})",
                first.name(),
                first.mark(),
                second.name(),
                second.mark()
            ),
            palette,
        ),
        layout.score,
    );

    let highlight = rules::winner(view.board()).map(|(_, line)| line);
    draw_cells(frame, &layout, view.board(), highlight, None, palette);

    frame.render_widget(
        help_line("→/Enter/click: Next | ←: Back | m: Menu | t: Theme | q: Quit", palette),
        layout.help,
    );
}

fn draw_cells(
    frame: &mut Frame,
    layout: &GameLayout,
    board: &Board,
    highlight: Option<rules::Line>,
    cursor: Option<Coord>,
    palette: &Palette,
) {
    for coord in Coord::all() {
        let symbol = match board.get(coord) {
            Square::Empty => String::new(),
            Square::Occupied(mark) => mark.to_string(),
        };
        let fill = if highlight.is_some_and(|line| line.contains(&coord)) {
            palette.win
        } else if cursor == Some(coord) {
            palette.active
        } else {
            palette.button
        };
        let cell = Paragraph::new(symbol)
            .alignment(Alignment::Center)
            .style(
                Style::new()
                    .bg(fill)
                    .fg(palette.fg)
                    .add_modifier(Modifier::BOLD),
            )
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::new().fg(palette.border)),
            );
        frame.render_widget(cell, layout.cells[coord.index()]);
    }
}

fn draw_popup(frame: &mut Frame, area: Rect, popup: &Popup, palette: &Palette) {
    let height = (popup.lines.len() as u16).saturating_add(4);
    let rect = center_rect(area, 64, height);
    let lines: Vec<Line> = popup.lines.iter().map(|l| Line::from(l.clone())).collect();
    let body = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .style(Style::new().bg(palette.bg).fg(palette.fg))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(popup.title.clone())
                .title_bottom("Press any key")
                .border_style(Style::new().fg(palette.active)),
        );
    frame.render_widget(Clear, rect);
    frame.render_widget(body, rect);
}
