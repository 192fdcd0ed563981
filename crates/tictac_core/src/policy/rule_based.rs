//! Rule-of-thumb move selection.

use rand::RngCore;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

use super::MovePolicy;
use crate::rules::LINES;
use crate::{Board, Coord, GameState, Mark, Square};

const CENTRE: Coord = Coord::at(1, 1);
const CORNERS: [Coord; 4] = [Coord::at(0, 0), Coord::at(0, 2), Coord::at(2, 0), Coord::at(2, 2)];

/// Takes a winning square, else blocks, else centre, else a corner, else anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedPolicy;

/// Empty square that would complete a line for `mark`.
pub(crate) fn completing_square(board: &Board, mark: Mark) -> Option<Coord> {
    let held = Square::Occupied(mark);
    LINES.iter().find_map(|line| {
        let owned = line.iter().filter(|c| board.get(**c) == held).count();
        let empty: Vec<Coord> = line.iter().copied().filter(|c| board.is_empty(*c)).collect();
        (owned == 2 && empty.len() == 1).then(|| empty[0])
    })
}

impl MovePolicy for RuleBasedPolicy {
    #[instrument(skip_all)]
    fn select(&self, state: &GameState, rng: &mut dyn RngCore) -> Option<Coord> {
        let board = state.board();
        let mark = *state.current_player().mark();

        if let Some(coord) = completing_square(board, mark) {
            debug!(%coord, "Taking win");
            return Some(coord);
        }
        if let Some(coord) = completing_square(board, mark.opponent()) {
            debug!(%coord, "Blocking");
            return Some(coord);
        }
        if board.is_empty(CENTRE) {
            return Some(CENTRE);
        }
        let corners: Vec<Coord> = CORNERS.into_iter().filter(|c| board.is_empty(*c)).collect();
        if let Some(coord) = corners.choose(rng) {
            return Some(*coord);
        }
        board.empty_cells().choose(rng).copied()
    }

    fn name(&self) -> &'static str {
        "rule_based"
    }
}
