//! The tic-tac-toe game state machine.
//!
//! A [`GameState`] owns the board, the two players, whose turn it is and the
//! undo/redo history. Status moves between [`GameStatus::InProgress`] and the
//! terminal states only through [`GameState::apply_move`],
//! [`GameState::undo`] and [`GameState::redo`].

use tracing::{debug, info, instrument};

use crate::error::{GameError, IllegalReason};
use crate::rules::{self, Line};
use crate::{Board, Coord, GameRecord, Mark, Move, MoveHistory, Player, Square};

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// A mark completed a line.
    Won {
        /// Winning mark.
        mark: Mark,
        /// The completed line.
        line: Line,
    },
    /// Board filled with no line.
    Tied,
}

impl GameStatus {
    /// Whether no further moves are accepted.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Complete game state.
///
/// Only [`GameState::new`] builds one. Saved games go through
/// [`GameRecord`], which replays its moves instead of trusting stored fields:
///
/// ```compile_fail
/// let _: tictac_core::GameState = serde_json::from_str("{}").unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    players: [Player; 2],
    current: usize,
    turns_played: usize,
    history: MoveHistory,
    status: GameStatus,
}

impl GameState {
    /// Creates a new game with `first` to move.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::DuplicateMark`] if both players use the same mark.
    #[instrument(skip(first, second), fields(first = %first.name(), second = %second.name()))]
    pub fn new(first: Player, second: Player) -> Result<Self, GameError> {
        if first.mark() == second.mark() {
            return Err(GameError::DuplicateMark);
        }
        debug!("Creating new game");
        Ok(Self {
            board: Board::new(),
            players: [first, second],
            current: 0,
            turns_played: 0,
            history: MoveHistory::new(),
            status: GameStatus::InProgress,
        })
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns both players, first mover at index 0.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Index of the player to move (or the winner, once won).
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The player to move.
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    /// Number of marks on the board.
    pub fn turns_played(&self) -> usize {
        self.turns_played
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Whether the game reached a win or tie.
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Returns the undo/redo history.
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    /// Whether [`GameState::undo`] would succeed.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Whether [`GameState::redo`] would succeed.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// The player holding `mark`.
    pub fn player_with(&self, mark: Mark) -> Option<&Player> {
        self.players.iter().find(|p| *p.mark() == mark)
    }

    /// Places the current player's mark at `(row, col)`.
    ///
    /// On success returns the new status. The turn passes to the other
    /// player unless the move ended the game.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::IllegalMove`] if the game is over, the position is
    /// off the board, or the square is taken.
    #[instrument(skip(self), fields(player = %self.current_player().name()))]
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<GameStatus, GameError> {
        let illegal = |reason| GameError::IllegalMove { row, col, reason };

        if self.is_terminal() {
            return Err(illegal(IllegalReason::GameOver));
        }
        let coord = Coord::new(row, col).ok_or(illegal(IllegalReason::OutOfRange))?;
        if !self.board.is_empty(coord) {
            return Err(illegal(IllegalReason::Occupied));
        }

        let mv = Move::new(coord, *self.current_player().mark(), self.current);
        self.board.set(coord, Square::Occupied(mv.mark));
        self.history.record(mv);
        self.turns_played += 1;
        self.settle_after(mv);

        info!(%mv, status = ?self.status, "Move applied");
        Ok(self.status)
    }

    /// Places the current player's mark at `coord`.
    pub fn apply(&mut self, coord: Coord) -> Result<GameStatus, GameError> {
        self.apply_move(coord.row(), coord.col())
    }

    /// Takes back the most recent move.
    ///
    /// The mover of the undone move is to move again and any terminal status
    /// is cleared.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NothingToUndo`] if no move has been played.
    #[instrument(skip(self))]
    pub fn undo(&mut self) -> Result<Move, GameError> {
        let mv = self.history.take_undo().ok_or(GameError::NothingToUndo)?;
        self.board.set(mv.coord, Square::Empty);
        self.turns_played -= 1;
        self.current = mv.player_index;
        self.status = GameStatus::InProgress;
        self.history.push_redo(mv);

        info!(%mv, "Move undone");
        Ok(mv)
    }

    /// Replays the most recently undone move.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NothingToRedo`] if nothing has been undone since
    /// the last fresh move.
    #[instrument(skip(self))]
    pub fn redo(&mut self) -> Result<Move, GameError> {
        let mv = self.history.take_redo().ok_or(GameError::NothingToRedo)?;
        self.board.set(mv.coord, Square::Occupied(mv.mark));
        self.turns_played += 1;
        self.history.push_undo(mv);
        self.current = mv.player_index;
        self.settle_after(mv);

        info!(%mv, status = ?self.status, "Move redone");
        Ok(mv)
    }

    /// Returns the line fully held by `mark`, if any.
    pub fn check_win(&self, mark: Mark) -> Option<Line> {
        rules::check_win(&self.board, mark)
    }

    /// True iff nine moves were played and the last one completed no line.
    pub fn check_tie(&self) -> bool {
        self.turns_played == 9
            && self
                .history
                .last()
                .is_some_and(|mv| rules::is_tie(&self.board, mv.mark))
    }

    /// Snapshot of players and played moves for replay or saving.
    pub fn record(&self) -> GameRecord {
        GameRecord::new(self.players.clone(), self.history.undo_stack().to_vec())
    }

    /// Sets status after `mv` landed and passes the turn if play continues.
    fn settle_after(&mut self, mv: Move) {
        if let Some(line) = self.check_win(mv.mark) {
            self.status = GameStatus::Won {
                mark: mv.mark,
                line,
            };
        } else if self.check_tie() {
            self.status = GameStatus::Tied;
        } else {
            self.status = GameStatus::InProgress;
            self.current = 1 - mv.player_index;
        }
    }
}
