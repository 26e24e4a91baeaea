//! Undo/redo history over whole-scene snapshots.

use crate::scene::Scene;
use log::debug;
use std::collections::VecDeque;

/// Maximum retained undo (and redo) snapshots.
pub const MAX_HISTORY: usize = 50;

/// Snapshot-based history: a past stack, the present scene, and a future
/// stack. Committing a new present pushes the old one onto the past and
/// clears the future; both stacks are capped at [`MAX_HISTORY`] entries,
/// discarding the oldest.
#[derive(Debug, Clone, Default)]
pub struct History {
    past: VecDeque<Scene>,
    present: Scene,
    future: VecDeque<Scene>,
}

impl History {
    pub fn new(present: Scene) -> Self {
        Self {
            past: VecDeque::new(),
            present,
            future: VecDeque::new(),
        }
    }

    pub fn present(&self) -> &Scene {
        &self.present
    }

    /// Mutable access to the present scene for live gesture updates.
    /// Changes made here are not undoable until a commit records them.
    pub fn present_mut(&mut self) -> &mut Scene {
        &mut self.present
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Record `next` as the new present. The old present becomes the most
    /// recent past entry and any redo states are discarded.
    ///
    /// A commit structurally equal to the present is skipped so no-op
    /// operations (e.g. a zero-distance drag) do not pollute the history.
    pub fn commit(&mut self, next: Scene) {
        if next == self.present {
            return;
        }
        let base = std::mem::replace(&mut self.present, next);
        self.push_past(base);
        self.future.clear();
        debug!("history: commit, past depth {}", self.past.len());
    }

    /// Commit the current present as one step relative to `base`, the
    /// snapshot taken before a gesture began. The whole gesture collapses
    /// into a single undo entry regardless of how many intermediate updates
    /// mutated the present.
    pub fn commit_with_base(&mut self, base: Scene) {
        if base == self.present {
            return;
        }
        self.push_past(base);
        self.future.clear();
        debug!("history: gesture commit, past depth {}", self.past.len());
    }

    /// Step back one snapshot. The present moves to the front of the redo
    /// stack. Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.past.pop_back() else {
            return false;
        };
        let current = std::mem::replace(&mut self.present, previous);
        self.future.push_front(current);
        if self.future.len() > MAX_HISTORY {
            self.future.pop_back();
        }
        debug!("history: undo, {} past / {} future", self.past.len(), self.future.len());
        true
    }

    /// Step forward one snapshot. Returns false when there is nothing to
    /// redo.
    pub fn redo(&mut self) -> bool {
        let Some(next) = self.future.pop_front() else {
            return false;
        };
        let current = std::mem::replace(&mut self.present, next);
        self.push_past(current);
        debug!("history: redo, {} past / {} future", self.past.len(), self.future.len());
        true
    }

    fn push_past(&mut self, scene: Scene) {
        self.past.push_back(scene);
        if self.past.len() > MAX_HISTORY {
            self.past.pop_front();
        }
    }
}
