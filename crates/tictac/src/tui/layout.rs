//! Screen geometry shared by drawing and mouse hit-testing.

use derive_more::Display;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use strum::{EnumIter, IntoEnumIterator};
use tictac_core::Coord;

/// Width of one grid cell in columns.
pub const CELL_WIDTH: u16 = 11;
/// Height of one grid cell in rows.
pub const CELL_HEIGHT: u16 = 3;

const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;
const MENU_ITEM_WIDTH: u16 = 30;
const MENU_ITEM_HEIGHT: u16 = 3;

/// Clickable buttons under the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum Control {
    /// Take back a move.
    Undo,
    /// Replay an undone move.
    Redo,
    /// New game, same players.
    Restart,
    /// Back to the main menu.
    Menu,
    /// Switch light/dark.
    Theme,
}

impl Control {
    /// Keyboard shortcut shown next to the label.
    pub fn key(self) -> char {
        match self {
            Self::Undo => 'u',
            Self::Redo => 'r',
            Self::Restart => 'n',
            Self::Menu => 'm',
            Self::Theme => 't',
        }
    }
}

/// What a click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    /// A grid cell.
    Cell(Coord),
    /// A control button.
    Control(Control),
}

/// Regions of the in-game screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameLayout {
    /// Title bar.
    pub title: Rect,
    /// Turn or result line.
    pub status: Rect,
    /// Scoreboard line for the two players.
    pub score: Rect,
    /// One rect per cell, indexed by [`Coord::index`].
    pub cells: [Rect; 9],
    /// Control buttons, in [`Control`] order.
    pub controls: Vec<(Control, Rect)>,
    /// Key help line.
    pub help: Rect,
}

impl GameLayout {
    /// Splits `area` into the in-game regions.
    pub fn compute(area: Rect) -> Self {
        let [title, status, score, board_area, controls_area, help] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(BOARD_HEIGHT),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .areas(area);

        let board = center_rect(board_area, BOARD_WIDTH, BOARD_HEIGHT);
        let cells = std::array::from_fn(|i| {
            let (row, col) = ((i / 3) as u16, (i % 3) as u16);
            Rect::new(
                board.x + col * (CELL_WIDTH + 1),
                board.y + row * (CELL_HEIGHT + 1),
                CELL_WIDTH,
                CELL_HEIGHT,
            )
            .intersection(board)
        });

        let slots = Layout::horizontal(Control::iter().map(|_| Constraint::Ratio(1, 5)))
            .split(controls_area);
        let controls = Control::iter().zip(slots.iter().copied()).collect();

        Self {
            title,
            status,
            score,
            cells,
            controls,
            help,
        }
    }

    /// The cell or control under a terminal position.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<Hit> {
        let pos = Position::new(column, row);
        if let Some(i) = self.cells.iter().position(|r| r.contains(pos)) {
            return Coord::from_index(i).map(Hit::Cell);
        }
        self.controls
            .iter()
            .find(|(_, r)| r.contains(pos))
            .map(|(c, _)| Hit::Control(*c))
    }
}

/// Regions of the main menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuLayout {
    /// Title bar.
    pub title: Rect,
    /// One button per entry.
    pub items: Vec<Rect>,
    /// Key help line.
    pub help: Rect,
}

impl MenuLayout {
    /// Stacks `count` buttons in the middle of `area`.
    pub fn compute(area: Rect, count: usize) -> Self {
        let [title, body, help] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        let height = MENU_ITEM_HEIGHT.saturating_mul(count as u16);
        let column = center_rect(body, MENU_ITEM_WIDTH, height);
        let items = (0..count as u16)
            .map(|i| {
                Rect::new(
                    column.x,
                    column.y + i * MENU_ITEM_HEIGHT,
                    column.width,
                    MENU_ITEM_HEIGHT,
                )
                .intersection(body)
            })
            .collect();

        Self { title, items, help }
    }

    /// Index of the entry under a terminal position.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<usize> {
        let pos = Position::new(column, row);
        self.items.iter().position(|r| r.contains(pos))
    }
}

/// A `width` x `height` rect centred in `area`, clipped to it.
pub fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
