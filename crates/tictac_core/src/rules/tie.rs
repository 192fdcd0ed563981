//! Tie detection logic for tic-tac-toe.

use super::win::check_win;
use crate::{Board, Mark};
use tracing::instrument;

/// A tie is a full board where the last mover holds no line.
///
/// Win is checked first, so a ninth move that completes a line is never a tie.
#[instrument(skip(board))]
pub fn is_tie(board: &Board, last_mover: Mark) -> bool {
    board.is_full() && check_win(board, last_mover).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Coord, Square};

    fn fill(board: &mut Board, layout: &str) {
        for (i, ch) in layout.chars().enumerate() {
            let coord = Coord::from_index(i).expect("nine cells");
            match ch {
                'X' => board.set(coord, Square::Occupied(Mark::X)),
                'O' => board.set(coord, Square::Occupied(Mark::O)),
                _ => {}
            }
        }
    }

    #[test]
    fn test_partial_board_is_not_tie() {
        let mut board = Board::new();
        fill(&mut board, "XO-------");
        assert!(!is_tie(&board, Mark::O));
    }

    #[test]
    fn test_full_board_without_line_is_tie() {
        // X O X / O X X / O X O
        let mut board = Board::new();
        fill(&mut board, "XOXOXXOXO");
        assert!(is_tie(&board, Mark::X));
    }

    #[test]
    fn test_full_board_with_line_is_not_tie() {
        // X X X / O O X / X O O
        let mut board = Board::new();
        fill(&mut board, "XXXOOXXOO");
        assert!(!is_tie(&board, Mark::X));
    }
}
