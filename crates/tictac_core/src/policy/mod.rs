//! Move-selection policies for automated players.
//!
//! Every policy returns a currently-empty coordinate whenever one exists and
//! draws all randomness from the supplied source, so a seeded rng makes the
//! choice reproducible.

mod minimax;
mod random;
mod rule_based;

pub use minimax::MinimaxPolicy;
pub use random::RandomPolicy;
pub use rule_based::RuleBasedPolicy;

use rand::RngCore;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{Coord, GameState};

/// Chooses moves for an automated player.
pub trait MovePolicy: std::fmt::Debug {
    /// Picks an empty cell for the player to move, or `None` on a full board.
    fn select(&self, state: &GameState, rng: &mut dyn RngCore) -> Option<Coord>;

    /// Short name for logs and menus.
    fn name(&self) -> &'static str;
}

/// AI strength offered at game setup.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    /// Uniformly random empty cell.
    #[default]
    Random,
    /// Win, block, centre, corner.
    RuleBased,
    /// Exhaustive game-tree search.
    Minimax,
}

impl Difficulty {
    /// Menu label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Random => "Easy (Random)",
            Self::RuleBased => "Medium (Rule-based)",
            Self::Minimax => "Hard (Minimax)",
        }
    }

    /// Maps a 1-based menu choice to a difficulty.
    #[instrument]
    pub fn from_choice(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(Self::Random),
            "2" => Some(Self::RuleBased),
            "3" => Some(Self::Minimax),
            _ => None,
        }
    }

    /// Builds the policy for this difficulty.
    #[instrument]
    pub fn policy(self) -> Box<dyn MovePolicy> {
        match self {
            Self::Random => Box::new(RandomPolicy),
            Self::RuleBased => Box::new(RuleBasedPolicy),
            Self::Minimax => Box::new(MinimaxPolicy),
        }
    }
}
