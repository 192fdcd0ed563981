//! Win detection logic for tic-tac-toe.

use crate::{Board, Coord, Mark, Square};
use tracing::instrument;

/// Three coordinates that win when they share a mark.
pub type Line = [Coord; 3];

/// The eight winning lines: rows, then columns, then diagonals.
pub const LINES: [Line; 8] = [
    // Rows
    [Coord::at(0, 0), Coord::at(0, 1), Coord::at(0, 2)],
    [Coord::at(1, 0), Coord::at(1, 1), Coord::at(1, 2)],
    [Coord::at(2, 0), Coord::at(2, 1), Coord::at(2, 2)],
    // Columns
    [Coord::at(0, 0), Coord::at(1, 0), Coord::at(2, 0)],
    [Coord::at(0, 1), Coord::at(1, 1), Coord::at(2, 1)],
    [Coord::at(0, 2), Coord::at(1, 2), Coord::at(2, 2)],
    // Diagonals
    [Coord::at(0, 0), Coord::at(1, 1), Coord::at(2, 2)],
    [Coord::at(0, 2), Coord::at(1, 1), Coord::at(2, 0)],
];

/// Returns the first line fully held by `mark`, if any.
#[instrument(skip(board))]
pub fn check_win(board: &Board, mark: Mark) -> Option<Line> {
    let held = Square::Occupied(mark);
    LINES
        .iter()
        .copied()
        .find(|line| line.iter().all(|c| board.get(*c) == held))
}

/// Returns the mark holding a complete line, if any.
#[instrument(skip(board))]
pub fn winner(board: &Board) -> Option<(Mark, Line)> {
    [Mark::X, Mark::O]
        .into_iter()
        .find_map(|mark| check_win(board, mark).map(|line| (mark, line)))
}
