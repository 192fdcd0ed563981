//! A match: one game state plus the policy, rng and scoreboard bookkeeping
//! both front-ends need around it.

use std::path::Path;

use derive_more::Display;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tictac_core::{
    Coord, GameError, GameState, GameStatus, MatchResult, MovePolicy, ScoreboardStore, StoreError,
};
use tracing::{debug, info, instrument, warn};

use crate::setup::MatchSetup;

/// Builds the AI rng: fixed when a seed is configured, otherwise from entropy.
pub fn rng_from(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Error from a match operation.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum MatchError {
    /// The game state rejected the operation.
    #[display("{_0}")]
    Game(GameError),

    /// The result was already recorded; only restart is possible.
    #[display("Game is finished, restart to play again")]
    Finished,

    /// A human tried to move while the AI is to play.
    #[display("Wait for the AI to move")]
    NotYourTurn,
}

impl std::error::Error for MatchError {}

impl From<GameError> for MatchError {
    fn from(err: GameError) -> Self {
        Self::Game(err)
    }
}

/// A running match.
#[derive(Debug)]
pub struct Match {
    setup: MatchSetup,
    state: GameState,
    policy: Option<Box<dyn MovePolicy>>,
    rng: StdRng,
    settled: Option<MatchResult>,
}

impl Match {
    /// Starts a match from `setup`, player 0 to move.
    #[instrument(skip(setup, rng))]
    pub fn new(setup: MatchSetup, rng: StdRng) -> Result<Self, GameError> {
        let [first, second] = setup.players().clone();
        let state = GameState::new(first, second)?;
        let policy = setup.difficulty().map(|d| d.policy());
        info!(mode = ?setup.mode(), "Match started");
        Ok(Self {
            setup,
            state,
            policy,
            rng,
            settled: None,
        })
    }

    /// The game being played.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The setup this match was created from.
    pub fn setup(&self) -> &MatchSetup {
        &self.setup
    }

    /// Hands the rng back so the next match continues the same sequence.
    pub fn into_rng(self) -> StdRng {
        self.rng
    }

    /// The recorded result, once the game ended and was settled.
    pub fn settled(&self) -> Option<&MatchResult> {
        self.settled.as_ref()
    }

    /// Whether the automated player should move now.
    pub fn awaiting_ai(&self) -> bool {
        self.policy.is_some() && !self.state.is_terminal() && *self.state.current_player().is_automated()
    }

    /// Plays a human move.
    #[instrument(skip(self), fields(coord = %coord))]
    pub fn play(&mut self, coord: Coord) -> Result<GameStatus, MatchError> {
        if self.awaiting_ai() {
            return Err(MatchError::NotYourTurn);
        }
        Ok(self.state.apply(coord)?)
    }

    /// Lets the policy move if it is the AI's turn. Returns the chosen cell.
    #[instrument(skip(self))]
    pub fn play_automated(&mut self) -> Result<Option<Coord>, MatchError> {
        if !self.awaiting_ai() {
            return Ok(None);
        }
        let Some(policy) = self.policy.as_ref() else {
            return Ok(None);
        };
        let Some(coord) = policy.select(&self.state, &mut self.rng) else {
            warn!("Policy found no move");
            return Ok(None);
        };
        debug!(policy = policy.name(), %coord, "AI move selected");
        self.state.apply(coord)?;
        Ok(Some(coord))
    }

    /// Takes back a move. Against the AI, also takes back the AI's reply so
    /// the human is to move again.
    #[instrument(skip(self))]
    pub fn undo(&mut self) -> Result<(), MatchError> {
        if self.settled.is_some() {
            return Err(MatchError::Finished);
        }
        self.state.undo()?;
        while self.awaiting_ai() && self.state.can_undo() {
            self.state.undo()?;
        }
        Ok(())
    }

    /// Replays an undone move. Against the AI, also replays the AI's reply.
    #[instrument(skip(self))]
    pub fn redo(&mut self) -> Result<(), MatchError> {
        if self.settled.is_some() {
            return Err(MatchError::Finished);
        }
        self.state.redo()?;
        while self.awaiting_ai() && self.state.can_redo() {
            self.state.redo()?;
        }
        Ok(())
    }

    /// The result implied by the current status, if terminal.
    pub fn result(&self) -> Option<MatchResult> {
        match self.state.status() {
            GameStatus::InProgress => None,
            GameStatus::Tied => Some(MatchResult::Tie),
            GameStatus::Won { mark, .. } => self
                .state
                .player_with(mark)
                .map(|p| MatchResult::Winner(p.name().clone())),
        }
    }

    /// Records a terminal result once: updates the scoreboard and saves the
    /// game for replay. Returns the result when this call recorded it.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the scoreboard cannot be written. A failure
    /// to save the replay file is only logged.
    #[instrument(skip(self, store, last_game), fields(last_game = %last_game.display()))]
    pub fn settle(
        &mut self,
        store: &mut dyn ScoreboardStore,
        last_game: &Path,
    ) -> Result<Option<MatchResult>, StoreError> {
        if self.settled.is_some() {
            return Ok(None);
        }
        let Some(result) = self.result() else {
            return Ok(None);
        };
        let [first, second] = self.state.players();
        store.record_result(&result, first.name(), second.name())?;
        self.settled = Some(result.clone());

        if let Err(e) = self.state.record().save(last_game) {
            warn!(error = %e, "Failed to save last game");
        }
        info!(?result, "Match settled");
        Ok(Some(result))
    }

    /// Starts over with the same players.
    #[instrument(skip(self))]
    pub fn restart(&mut self) -> Result<(), GameError> {
        let [first, second] = self.setup.players().clone();
        self.state = GameState::new(first, second)?;
        self.settled = None;
        info!("Match restarted");
        Ok(())
    }

    /// One-line description of the game status.
    pub fn headline(&self) -> String {
        match self.state.status() {
            GameStatus::InProgress => {
                let p = self.state.current_player();
                format!("{}'s turn ({})", p.name(), p.mark())
            }
            GameStatus::Won { mark, .. } => match self.state.player_with(mark) {
                Some(p) => format!("{} ({}) wins!", p.name(), mark),
                None => format!("{} wins!", mark),
            },
            GameStatus::Tied => "It's a tie!".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictac_core::{Difficulty, Mark, MemoryStore, ScoreRecord};

    fn key(k: usize) -> Coord {
        Coord::from_key(k).expect("key")
    }

    fn two_player() -> Match {
        let setup = MatchSetup::two_player("Ada", Mark::X, "Bob").expect("setup");
        Match::new(setup, rng_from(Some(1))).expect("match")
    }

    #[test]
    fn test_settle_records_once() {
        let dir = tempfile::tempdir().expect("tempdir");
        let last = dir.path().join("last_game.json");
        let mut store = MemoryStore::new();
        let mut m = two_player();
        for k in [1, 4, 2, 5] {
            m.play(key(k)).expect("legal");
        }
        assert_eq!(m.settle(&mut store, &last).expect("settle"), None);

        m.play(key(3)).expect("legal");
        assert_eq!(m.headline(), "Ada (X) wins!");
        let result = m.settle(&mut store, &last).expect("settle");
        assert_eq!(result, Some(MatchResult::Winner("Ada".into())));
        assert_eq!(m.settle(&mut store, &last).expect("settle"), None);

        let board = store.load().expect("load");
        assert_eq!(board["Ada"], ScoreRecord { wins: 1, losses: 0, ties: 0 });
        assert_eq!(board["Bob"], ScoreRecord { wins: 0, losses: 1, ties: 0 });
        assert!(last.exists());
    }

    /// Fails the first write, then behaves like a memory store.
    #[derive(Debug, Default)]
    struct FlakyStore {
        failed: bool,
        inner: MemoryStore,
    }

    impl ScoreboardStore for FlakyStore {
        fn load(&self) -> Result<tictac_core::Scoreboard, StoreError> {
            self.inner.load()
        }

        fn save(&mut self, board: &tictac_core::Scoreboard) -> Result<(), StoreError> {
            if !self.failed {
                self.failed = true;
                return Err(StoreError::new("disk full"));
            }
            self.inner.save(board)
        }
    }

    #[test]
    fn test_failed_write_can_be_retried() {
        let dir = tempfile::tempdir().expect("tempdir");
        let last = dir.path().join("last_game.json");
        let mut store = FlakyStore::default();
        let mut m = two_player();
        for k in [1, 4, 2, 5, 3] {
            m.play(key(k)).expect("legal");
        }

        assert!(m.settle(&mut store, &last).is_err());
        assert!(m.settled().is_none());
        assert!(!last.exists());

        let result = m.settle(&mut store, &last).expect("retry");
        assert_eq!(result, Some(MatchResult::Winner("Ada".into())));
        assert_eq!(m.settled(), Some(&MatchResult::Winner("Ada".into())));
        let board = store.load().expect("load");
        assert_eq!(board["Ada"], ScoreRecord { wins: 1, losses: 0, ties: 0 });
        assert!(last.exists());
        assert_eq!(m.undo().unwrap_err(), MatchError::Finished);
    }

    #[test]
    fn test_finished_match_refuses_undo_until_restart() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut store = MemoryStore::new();
        let mut m = two_player();
        for k in [1, 4, 2, 5, 3] {
            m.play(key(k)).expect("legal");
        }
        m.settle(&mut store, &dir.path().join("g.json")).expect("settle");
        assert_eq!(m.undo().unwrap_err(), MatchError::Finished);

        m.restart().expect("restart");
        assert_eq!(m.state().turns_played(), 0);
        assert!(m.settled().is_none());
        assert_eq!(m.headline(), "Ada's turn (X)");
    }

    #[test]
    fn test_undo_against_ai_returns_turn_to_human() {
        let setup = MatchSetup::vs_ai("Ada", Mark::X, Difficulty::Random).expect("setup");
        let mut m = Match::new(setup, rng_from(Some(5))).expect("match");

        m.play(key(5)).expect("legal");
        assert!(m.awaiting_ai());
        assert_eq!(m.play(key(1)).unwrap_err(), MatchError::NotYourTurn);
        let ai = m.play_automated().expect("ai").expect("ai moved");
        assert!(!m.state().board().is_empty(ai));
        assert_eq!(m.state().turns_played(), 2);

        m.undo().expect("undo");
        assert_eq!(m.state().turns_played(), 0);
        assert_eq!(m.state().current_index(), 0);

        m.redo().expect("redo");
        assert_eq!(m.state().turns_played(), 2);
        assert_eq!(m.state().current_index(), 0);
    }

    #[test]
    fn test_play_automated_is_noop_on_human_turn() {
        let mut m = two_player();
        assert_eq!(m.play_automated().expect("noop"), None);
        assert_eq!(m.state().turns_played(), 0);
    }
}
