//! Reversible edits.
//!
//! An [`EditorAction`] holds two value snapshots of one object's transform.
//! [`EditorAction::switch_values`] writes whichever snapshot is not live, so
//! the same call undoes and redoes. Only the attribute groups that differ
//! between the snapshots are written back.

#[cfg(test)]
#[path = "action_test.rs"]
mod action_test;

use std::rc::Rc;

use crate::representation::{ObjectId, Transform};
use crate::support::{ErasedSupport, SceneObject, SharedObject};

/// Before/after snapshots of one object for one edit.
pub struct EditorAction {
    target: ObjectId,
    object: SharedObject,
    support: Rc<dyn ErasedSupport>,
    before: Transform,
    after: Transform,
    /// `true` while the object shows `before`.
    reverted: bool,
}

impl std::fmt::Debug for EditorAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorAction")
            .field("target", &self.target)
            .field("before", &self.before)
            .field("after", &self.after)
            .field("reverted", &self.reverted)
            .finish_non_exhaustive()
    }
}

impl EditorAction {
    /// Action whose `after` state is the one currently live on the object.
    #[must_use]
    pub fn new(
        target: ObjectId,
        object: SharedObject,
        support: Rc<dyn ErasedSupport>,
        before: Transform,
        after: Transform,
    ) -> Self {
        Self { target, object, support, before, after, reverted: false }
    }

    #[must_use]
    pub fn target(&self) -> ObjectId {
        self.target
    }

    #[must_use]
    pub fn before(&self) -> Transform {
        self.before
    }

    #[must_use]
    pub fn after(&self) -> Transform {
        self.after
    }

    #[must_use]
    pub fn is_reverted(&self) -> bool {
        self.reverted
    }

    /// Whether applying this action changes nothing.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.before == self.after
    }

    /// Swap the object's live attributes to the other snapshot.
    pub fn switch_values(&mut self) {
        let (from, to) = if self.reverted { (self.before, self.after) } else { (self.after, self.before) };
        write_changed(&*self.support, &mut *self.object.borrow_mut(), &from, &to);
        self.reverted = !self.reverted;
    }
}

/// Write the attribute groups of `to` that differ from `from`.
fn write_changed(support: &dyn ErasedSupport, obj: &mut dyn SceneObject, from: &Transform, to: &Transform) {
    if from.position_differs(to) {
        support.write_position(obj, to.x, to.y);
    }
    if from.size_differs(to) {
        support.write_size(obj, to.width, to.height);
    }
    if from.rotation_differs(to) {
        support.write_rotation(obj, to.rotation);
    }
}

/// The actions of one gesture, undone and redone as a unit.
#[derive(Debug, Default)]
pub struct ActionBatch {
    actions: Vec<EditorAction>,
}

impl ActionBatch {
    #[must_use]
    pub fn new(actions: Vec<EditorAction>) -> Self {
        Self { actions }
    }

    pub fn push(&mut self, action: EditorAction) {
        self.actions.push(action);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Whether every action in the batch is a no-op.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.actions.iter().all(EditorAction::is_noop)
    }

    pub fn iter(&self) -> impl Iterator<Item = &EditorAction> {
        self.actions.iter()
    }

    /// Switch every action. Returns the number that changed the scene.
    pub fn switch_values(&mut self) -> usize {
        let mut changed = 0;
        for action in &mut self.actions {
            action.switch_values();
            if !action.is_noop() {
                changed += 1;
            }
        }
        changed
    }

    /// Drop every action targeting `id`.
    pub fn remove_target(&mut self, id: ObjectId) {
        self.actions.retain(|action| action.target() != id);
    }
}

impl FromIterator<EditorAction> for ActionBatch {
    fn from_iter<I: IntoIterator<Item = EditorAction>>(iter: I) -> Self {
        Self { actions: iter.into_iter().collect() }
    }
}
