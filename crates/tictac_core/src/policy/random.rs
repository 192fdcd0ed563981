//! Uniformly random move selection.

use rand::RngCore;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

use super::MovePolicy;
use crate::{Coord, GameState};

/// Picks any empty cell with equal probability.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomPolicy;

impl MovePolicy for RandomPolicy {
    #[instrument(skip_all)]
    fn select(&self, state: &GameState, rng: &mut dyn RngCore) -> Option<Coord> {
        let choice = state.board().empty_cells().choose(rng).copied();
        debug!(?choice, "Random policy chose");
        choice
    }

    fn name(&self) -> &'static str {
        "random"
    }
}
