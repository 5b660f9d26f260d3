//! Undo/redo log of inverse-capable actions.
//!
//! Every mutation records one [`Action`] holding its own copy of the
//! affected text. Undo applies the inverse of the newest action; redo
//! applies the action again. Actions are never grouped: each keystroke is
//! its own undo step.
//!
//! Replaying an action must not record a new one. Instead of a shared
//! "is undoing" flag, the mutation path takes an explicit [`EditMode`].

use crate::config::DEFAULT_MAX_HISTORY_DEPTH;
use crate::text::buffer::{Position, end_of_text};
use std::collections::VecDeque;
use std::time::Instant;

/// Whether a mutation is a fresh edit or a history replay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditMode {
    /// User-originated edit: record it and drop the redo stack.
    Record,
    /// Undo/redo replay: leave the history untouched.
    Replay,
}

/// Kind of recorded mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionKind {
    Insert,
    Delete,
}

/// One undoable unit of change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Action {
    pub kind: ActionKind,
    /// Where the text was inserted or where the deleted range started.
    pub start: Position,
    /// Inserted or deleted text, owned by the action.
    pub text: String,
    pub timestamp: Instant,
}

impl Action {
    /// Create an action stamped with the current time.
    #[must_use]
    pub fn new(kind: ActionKind, start: Position, text: impl Into<String>) -> Self {
        Self {
            kind,
            start,
            text: text.into(),
            timestamp: Instant::now(),
        }
    }

    /// Position just past the action's text.
    #[must_use]
    pub fn end(&self) -> Position {
        end_of_text(self.start, &self.text)
    }
}

/// Undo and redo stacks with a bounded undo depth.
#[derive(Clone, Debug)]
pub struct History {
    undo_stack: VecDeque<Action>,
    redo_stack: Vec<Action>,
    /// Maximum number of undo actions to retain. Oldest are dropped first.
    max_depth: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::with_max_depth(DEFAULT_MAX_HISTORY_DEPTH)
    }
}

impl History {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a history with a custom maximum depth.
    #[must_use]
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: Vec::new(),
            max_depth,
        }
    }

    /// Record a fresh mutation. Clears the redo stack.
    ///
    /// Replays and empty texts are ignored.
    pub fn record(&mut self, mode: EditMode, kind: ActionKind, start: Position, text: &str) {
        if mode == EditMode::Replay || text.is_empty() {
            return;
        }
        self.redo_stack.clear();
        self.undo_stack.push_back(Action::new(kind, start, text));
        self.enforce_depth();
    }

    /// Take the newest action for undoing.
    pub fn pop_undo(&mut self) -> Option<Action> {
        self.undo_stack.pop_back()
    }

    /// Store an undone action for redo.
    pub fn push_redo(&mut self, action: Action) {
        self.redo_stack.push(action);
    }

    /// Take the newest undone action for redoing.
    pub fn pop_redo(&mut self) -> Option<Action> {
        self.redo_stack.pop()
    }

    /// Return a redone action to the undo stack without touching redo.
    pub fn push_undo(&mut self, action: Action) {
        self.undo_stack.push_back(action);
        self.enforce_depth();
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    #[must_use]
    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    #[must_use]
    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    /// Newest undoable action.
    #[must_use]
    pub fn peek_undo(&self) -> Option<&Action> {
        self.undo_stack.back()
    }

    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Change the depth limit, pruning the oldest actions if needed.
    pub fn set_max_depth(&mut self, max_depth: usize) {
        self.max_depth = max_depth;
        self.enforce_depth();
    }

    /// Drop all actions and release their storage.
    pub fn clear(&mut self) {
        self.undo_stack = VecDeque::new();
        self.redo_stack = Vec::new();
    }

    fn enforce_depth(&mut self) {
        while self.undo_stack.len() > self.max_depth {
            self.undo_stack.pop_front();
        }
    }
}
