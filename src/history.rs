//! Undo/redo history over immutable snapshots.
//!
//! The history holds a stack of past snapshots, the current snapshot, and a
//! stack of future snapshots (populated by undo, consumed by redo).
//!
//! # Recording rules
//!
//! - `apply` records only when the mutation produces a snapshot that differs
//!   from the current one. A no-op edit leaves past *and* future untouched.
//! - Any recorded change clears the future.
//! - The past is capped (default [`DEFAULT_HISTORY_LIMIT`]); when the cap is
//!   exceeded the oldest snapshot is evicted. A limit of `0` disables the cap.

use std::collections::VecDeque;

/// Default number of past snapshots kept for undo.
pub const DEFAULT_HISTORY_LIMIT: usize = 100;

/// Snapshot history with bounded undo and unbounded-within-cap redo.
#[derive(Debug, Clone)]
pub struct History<T> {
    past: VecDeque<T>,
    current: T,
    future: Vec<T>,
    limit: usize,
}

impl<T: Clone + PartialEq> History<T> {
    /// Start a history at `initial` with the default cap.
    pub fn new(initial: T) -> Self {
        Self::with_limit(initial, DEFAULT_HISTORY_LIMIT)
    }

    /// Start a history with an explicit cap on past snapshots (`0` = no cap).
    pub fn with_limit(initial: T, limit: usize) -> Self {
        Self {
            past: VecDeque::new(),
            current: initial,
            future: Vec::new(),
            limit,
        }
    }

    /// The current snapshot.
    pub fn current(&self) -> &T {
        &self.current
    }

    /// Apply a mutation to the current snapshot.
    ///
    /// Returns `true` if a new snapshot was recorded, `false` for a no-op.
    pub fn apply<F>(&mut self, mutation: F) -> bool
    where
        F: FnOnce(&T) -> T,
    {
        let next = mutation(&self.current);
        if next == self.current {
            return false;
        }

        let previous = std::mem::replace(&mut self.current, next);
        self.past.push_back(previous);
        if self.limit > 0 && self.past.len() > self.limit {
            self.past.pop_front();
        }
        self.future.clear();
        true
    }

    /// Step back one snapshot. Returns `false` if there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.past.pop_back() else {
            return false;
        };
        let undone = std::mem::replace(&mut self.current, previous);
        self.future.push(undone);
        true
    }

    /// Re-apply the most recently undone snapshot. Returns `false` if there is
    /// nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(next) = self.future.pop() else {
            return false;
        };
        let redone_from = std::mem::replace(&mut self.current, next);
        self.past.push_back(redone_from);
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    pub fn past_len(&self) -> usize {
        self.past.len()
    }

    pub fn future_len(&self) -> usize {
        self.future.len()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}
