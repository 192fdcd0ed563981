//! Undo/redo stacks.

use tracing::{debug, instrument};

use crate::Move;

/// Paired undo and redo stacks, most recent move last.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveHistory {
    undo: Vec<Move>,
    redo: Vec<Move>,
}

impl MoveHistory {
    /// Creates empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a freshly played move. Any redo history is discarded.
    #[instrument(skip(self))]
    pub fn record(&mut self, mv: Move) {
        if !self.redo.is_empty() {
            debug!(discarded = self.redo.len(), "Clearing redo stack");
        }
        self.redo.clear();
        self.undo.push(mv);
    }

    /// Pops the most recent played move.
    pub fn take_undo(&mut self) -> Option<Move> {
        self.undo.pop()
    }

    /// Pops the most recently undone move.
    pub fn take_redo(&mut self) -> Option<Move> {
        self.redo.pop()
    }

    /// Pushes an undone move so it can be redone.
    pub fn push_redo(&mut self, mv: Move) {
        self.redo.push(mv);
    }

    /// Pushes a redone move back onto the played stack. Redo history is kept.
    pub fn push_undo(&mut self, mv: Move) {
        self.undo.push(mv);
    }

    /// Played moves, oldest first.
    pub fn undo_stack(&self) -> &[Move] {
        &self.undo
    }

    /// Undone moves; the next one to redo is last.
    pub fn redo_stack(&self) -> &[Move] {
        &self.redo
    }

    /// The most recent played move.
    pub fn last(&self) -> Option<&Move> {
        self.undo.last()
    }

    /// Whether undo is possible.
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    /// Whether redo is possible.
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }
}
