//! Undo/redo stacks of action batches.
//!
//! Undo pops the newest batch, switches every action in it, and moves it to
//! the redo stack; redo is the mirror image. Batches move whole.
//!
//! Pushing a batch that changes something clears the redo stack. A no-op
//! batch (a click without a drag) leaves redo intact so selecting an object
//! never throws away undone work.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use tracing::debug;

use crate::action::ActionBatch;
use crate::error::{EditorError, StackKind};
use crate::representation::ObjectId;

/// Undo and redo stacks.
#[derive(Debug, Default)]
pub struct History {
    undo: Vec<ActionBatch>,
    redo: Vec<ActionBatch>,
    /// Maximum undo depth; 0 means unlimited.
    limit: usize,
}

impl History {
    #[must_use]
    pub fn new(limit: usize) -> Self {
        Self { undo: Vec::new(), redo: Vec::new(), limit }
    }

    /// Record a finished gesture.
    pub fn push(&mut self, batch: ActionBatch) {
        if !batch.is_noop() && !self.redo.is_empty() {
            debug!(dropped = self.redo.len(), "new edit clears redo history");
            self.redo.clear();
        }
        self.undo.push(batch);
        if self.limit > 0 && self.undo.len() > self.limit {
            self.undo.remove(0);
        }
    }

    /// Revert the newest batch. Returns the number of actions that changed the scene.
    ///
    /// # Errors
    ///
    /// [`EditorError::EmptyStack`] when there is nothing to undo.
    pub fn undo(&mut self) -> Result<usize, EditorError> {
        let mut batch = self.undo.pop().ok_or(EditorError::EmptyStack(StackKind::Undo))?;
        let switched = batch.switch_values();
        self.redo.push(batch);
        Ok(switched)
    }

    /// Reapply the newest undone batch. Returns the number of actions that changed the scene.
    ///
    /// # Errors
    ///
    /// [`EditorError::EmptyStack`] when there is nothing to redo.
    pub fn redo(&mut self) -> Result<usize, EditorError> {
        let mut batch = self.redo.pop().ok_or(EditorError::EmptyStack(StackKind::Redo))?;
        let switched = batch.switch_values();
        self.undo.push(batch);
        Ok(switched)
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    #[must_use]
    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }

    /// Drop every action targeting `id`, and any batch left empty.
    pub fn forget(&mut self, id: ObjectId) {
        for stack in [&mut self.undo, &mut self.redo] {
            for batch in stack.iter_mut() {
                batch.remove_target(id);
            }
            stack.retain(|batch| !batch.is_empty());
        }
        debug!(%id, undo = self.undo.len(), redo = self.redo.len(), "forgot object history");
    }

    /// Drop all history.
    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }
}
