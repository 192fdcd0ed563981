//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are separated from
//! board storage so the state machine and the move policies share them.

mod tie;
mod win;

pub use tie::is_tie;
pub use win::{LINES, Line, check_win, winner};
