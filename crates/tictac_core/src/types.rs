//! Core domain types for tic-tac-toe.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::GameError;

/// Mark a player places on the board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display, strum::EnumIter,
)]
pub enum Mark {
    /// The X symbol.
    #[display("X")]
    X,
    /// The O symbol.
    #[display("O")]
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Parses a symbol choice, ignoring case and surrounding whitespace.
    #[instrument]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol.trim().to_ascii_uppercase().as_str() {
            "X" => Some(Mark::X),
            "O" => Some(Mark::O),
            _ => None,
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square holding a mark.
    Occupied(Mark),
}

/// Board coordinate, row and column both in `0..3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("({row}, {col})")]
pub struct Coord {
    row: usize,
    col: usize,
}

impl Coord {
    /// The middle square.
    pub const CENTER: Coord = Coord::at(1, 1);

    /// Creates a coordinate, or `None` when either component is out of range.
    pub fn new(row: usize, col: usize) -> Option<Self> {
        (row < 3 && col < 3).then_some(Self { row, col })
    }

    pub(crate) const fn at(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Creates a coordinate from a row-major index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        (index < 9).then(|| Self::at(index / 3, index % 3))
    }

    /// Creates a coordinate from a 1-indexed console key (1-9).
    pub fn from_key(key: usize) -> Option<Self> {
        key.checked_sub(1).and_then(Self::from_index)
    }

    /// Row component.
    pub fn row(self) -> usize {
        self.row
    }

    /// Column component.
    pub fn col(self) -> usize {
        self.col
    }

    /// Row-major index (0-8).
    pub fn index(self) -> usize {
        self.row * 3 + self.col
    }

    /// 1-indexed console key (1-9).
    pub fn key(self) -> usize {
        self.index() + 1
    }

    /// All nine coordinates in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..9).map(|i| Self::at(i / 3, i % 3))
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the square at the given coordinate.
    pub fn get(&self, coord: Coord) -> Square {
        self.squares[coord.index()]
    }

    /// Sets the square at the given coordinate.
    pub fn set(&mut self, coord: Coord, square: Square) {
        self.squares[coord.index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, coord: Coord) -> bool {
        self.get(coord) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Empty coordinates in row-major order.
    pub fn empty_cells(&self) -> Vec<Coord> {
        Coord::all().filter(|c| self.is_empty(*c)).collect()
    }

    /// Number of occupied squares.
    pub fn occupied(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        self.occupied() == 9
    }

    /// Formats the board with a 1-9 position guide beside it.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            let mut cells = Vec::with_capacity(3);
            let mut guide = Vec::with_capacity(3);
            for col in 0..3 {
                let coord = Coord::at(row, col);
                cells.push(match self.get(coord) {
                    Square::Empty => "-".to_string(),
                    Square::Occupied(mark) => mark.to_string(),
                });
                guide.push(coord.key().to_string());
            }
            result.push_str(&format!("{}     {}", cells.join(" "), guide.join(" ")));
            if row < 2 {
                result.push('\n');
            }
        }
        result
    }
}

/// A participant in a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Player {
    /// Display name, never empty.
    name: String,
    /// Mark placed by this player.
    mark: Mark,
    /// Whether a move policy plays for this player.
    is_automated: bool,
}

impl Player {
    /// Creates a player.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::EmptyName`] if the name is blank.
    #[instrument(skip(name), fields(name = %name.as_ref()))]
    pub fn new(name: impl AsRef<str>, mark: Mark, is_automated: bool) -> Result<Self, GameError> {
        let name = name.as_ref().trim();
        if name.is_empty() {
            return Err(GameError::EmptyName);
        }
        Ok(Self {
            name: name.to_string(),
            mark,
            is_automated,
        })
    }

    /// Creates a human player.
    pub fn human(name: impl AsRef<str>, mark: Mark) -> Result<Self, GameError> {
        Self::new(name, mark, false)
    }

    /// Creates an automated player.
    pub fn automated(name: impl AsRef<str>, mark: Mark) -> Result<Self, GameError> {
        Self::new(name, mark, true)
    }
}
