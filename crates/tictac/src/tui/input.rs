//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use tictac_core::Coord;

/// Moves the cursor one cell with the arrow keys, stopping at the edges.
pub fn move_cursor(cursor: Coord, key: KeyCode) -> Coord {
    let (row, col) = (cursor.row(), cursor.col());
    let next = match key {
        KeyCode::Up => row.checked_sub(1).and_then(|r| Coord::new(r, col)),
        KeyCode::Down => Coord::new(row + 1, col),
        KeyCode::Left => col.checked_sub(1).and_then(|c| Coord::new(row, c)),
        KeyCode::Right => Coord::new(row, col + 1),
        _ => None,
    };
    next.unwrap_or(cursor)
}
