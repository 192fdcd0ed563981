//! Exhaustive minimax search.
//!
//! The 3x3 tree is small enough to search completely. Scores prefer quicker
//! wins and slower losses; equally scored moves are broken with the rng.

use rand::RngCore;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

use super::MovePolicy;
use crate::rules::check_win;
use crate::{Board, Coord, GameState, Mark, Square};

const WIN: i32 = 10;

/// Plays perfectly: never loses.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimaxPolicy;

/// Score of `board` for `me`, with `to_move` about to play.
fn score(board: &mut Board, me: Mark, to_move: Mark, depth: i32) -> i32 {
    if check_win(board, me).is_some() {
        return WIN - depth;
    }
    if check_win(board, me.opponent()).is_some() {
        return depth - WIN;
    }
    let empty = board.empty_cells();
    if empty.is_empty() {
        return 0;
    }

    let scores = empty.into_iter().map(|coord| {
        board.set(coord, Square::Occupied(to_move));
        let s = score(board, me, to_move.opponent(), depth + 1);
        board.set(coord, Square::Empty);
        s
    });
    if to_move == me {
        scores.max().unwrap_or(0)
    } else {
        scores.min().unwrap_or(0)
    }
}

impl MovePolicy for MinimaxPolicy {
    #[instrument(skip_all)]
    fn select(&self, state: &GameState, rng: &mut dyn RngCore) -> Option<Coord> {
        let me = *state.current_player().mark();
        let mut board = state.board().clone();

        let mut best = i32::MIN;
        let mut candidates = Vec::new();
        for coord in board.empty_cells() {
            board.set(coord, Square::Occupied(me));
            let s = score(&mut board, me, me.opponent(), 1);
            board.set(coord, Square::Empty);

            if s > best {
                best = s;
                candidates.clear();
            }
            if s == best {
                candidates.push(coord);
            }
        }

        let choice = candidates.choose(rng).copied();
        debug!(?choice, best, options = candidates.len(), "Minimax chose");
        choice
    }

    fn name(&self) -> &'static str {
        "minimax"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::RandomPolicy;
    use crate::{GameStatus, Player};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn game() -> GameState {
        GameState::new(
            Player::human("Ada", Mark::X).expect("player"),
            Player::automated("AI", Mark::O).expect("player"),
        )
        .expect("game")
    }

    #[test]
    fn test_takes_immediate_win() {
        let mut state = game();
        // X: 1, 2, 9   O: 5, 4 ... O to move wins at 6.
        for key in [1, 5, 2, 4, 9] {
            state.apply(Coord::from_key(key).expect("key")).expect("legal");
        }
        let mut rng = StdRng::seed_from_u64(0);
        // O must take 6 (win) rather than block 3.
        assert_eq!(MinimaxPolicy.select(&state, &mut rng), Coord::from_key(6));
    }

    #[test]
    fn test_blocks_immediate_threat() {
        let mut state = game();
        for key in [1, 5, 2] {
            state.apply(Coord::from_key(key).expect("key")).expect("legal");
        }
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(MinimaxPolicy.select(&state, &mut rng), Coord::from_key(3));
    }

    #[test]
    fn test_self_play_is_a_tie() {
        let mut state = game();
        let mut rng = StdRng::seed_from_u64(11);
        while !state.is_terminal() {
            let coord = MinimaxPolicy.select(&state, &mut rng).expect("move");
            state.apply(coord).expect("legal");
        }
        assert_eq!(state.status(), GameStatus::Tied);
    }

    #[test]
    fn test_never_loses_to_random() {
        for seed in 0..20 {
            let mut state = game();
            let mut rng = StdRng::seed_from_u64(seed);
            while !state.is_terminal() {
                let coord = if state.current_index() == 0 {
                    RandomPolicy.select(&state, &mut rng)
                } else {
                    MinimaxPolicy.select(&state, &mut rng)
                }
                .expect("move");
                state.apply(coord).expect("legal");
            }
            assert!(
                !matches!(state.status(), GameStatus::Won { mark: Mark::X, .. }),
                "seed {seed}: minimax lost"
            );
        }
    }
}
