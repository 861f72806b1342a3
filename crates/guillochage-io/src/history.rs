//! Undo/redo history of project snapshots.
//!
//! Every edit pushes a full snapshot. The bottom of the undo stack is the
//! state the project was opened in; undo never pops it.

use crate::project::ProjectFile;
use tracing::trace;

/// Maximum number of snapshots kept on the undo stack.
pub const MAX_HISTORY_DEPTH: usize = 50;

#[derive(Debug, Clone)]
pub struct ProjectHistory {
    undo_stack: Vec<ProjectFile>,
    redo_stack: Vec<ProjectFile>,
    max_depth: usize,
}

impl ProjectHistory {
    /// History starting at `initial`, with the default depth.
    pub fn new(initial: ProjectFile) -> Self {
        Self::with_depth(initial, MAX_HISTORY_DEPTH)
    }

    /// Create with custom maximum undo depth (at least 1)
    pub fn with_depth(initial: ProjectFile, max_depth: usize) -> Self {
        Self {
            undo_stack: vec![initial],
            redo_stack: Vec::new(),
            max_depth: max_depth.max(1),
        }
    }

    /// Drops all history and starts again from `state`, e.g. after opening a file.
    pub fn reset(&mut self, state: ProjectFile) {
        self.undo_stack.clear();
        self.undo_stack.push(state);
        self.redo_stack.clear();
    }

    /// Records `state`. Returns `false` when it equals the current state.
    pub fn snapshot(&mut self, state: ProjectFile) -> bool {
        if self.undo_stack.last() == Some(&state) {
            return false;
        }
        self.redo_stack.clear();
        self.undo_stack.push(state);
        if self.undo_stack.len() > self.max_depth {
            self.undo_stack.remove(0);
        }
        trace!(depth = self.undo_stack.len(), "snapshot taken");
        true
    }

    /// Steps back and returns the state to restore.
    pub fn undo(&mut self) -> Option<&ProjectFile> {
        if self.undo_stack.len() <= 1 {
            return None;
        }
        let current = self.undo_stack.pop()?;
        self.redo_stack.push(current);
        self.undo_stack.last()
    }

    /// Re-applies the last undone state.
    pub fn redo(&mut self) -> Option<&ProjectFile> {
        let next = self.redo_stack.pop()?;
        self.undo_stack.push(next);
        self.undo_stack.last()
    }

    pub fn current(&self) -> Option<&ProjectFile> {
        self.undo_stack.last()
    }

    pub fn can_undo(&self) -> bool {
        self.undo_stack.len() > 1
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Get number of undo operations available
    pub fn undo_count(&self) -> usize {
        self.undo_stack.len() - 1
    }

    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }
}

impl Default for ProjectHistory {
    fn default() -> Self {
        Self::new(ProjectFile::default())
    }
}
