//! First-class move type.

use derive_more::Display;
use derive_new::new;
use serde::{Deserialize, Serialize};

use crate::{Coord, Mark};

/// A mark placed at a coordinate by one of the two players.
///
/// Moves are recorded at application time and never change afterwards;
/// undo and redo move them between stacks intact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, new)]
#[display("{mark} -> {}", coord.key())]
pub struct Move {
    /// Where the mark was placed.
    pub coord: Coord,
    /// The mark placed.
    pub mark: Mark,
    /// Index (0 or 1) of the player who moved.
    pub player_index: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_display_uses_key() {
        let mv = Move::new(Coord::CENTER, Mark::O, 1);
        assert_eq!(mv.to_string(), "O -> 5");
    }
}
