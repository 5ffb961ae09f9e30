//! Hit-testing and the selection set.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::camera::Point;
use crate::representation::{ObjectId, ObjectRepresentation};

/// The smallest-area object whose bounds contain `p`.
///
/// Small objects drawn over large ones stay clickable. Ties go to the
/// earliest object in `objects`.
#[must_use]
pub fn find_smallest_at(objects: &[ObjectRepresentation], p: Point) -> Option<&ObjectRepresentation> {
    let mut best: Option<(&ObjectRepresentation, f64)> = None;
    for orep in objects.iter().filter(|o| o.contains(p)) {
        let area = orep.bounds().area();
        if best.is_none_or(|(_, smallest)| area < smallest) {
            best = Some((orep, area));
        }
    }
    best.map(|(orep, _)| orep)
}

/// Ordered set of selected object ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: Vec<ObjectId>,
}

impl Selection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `id` if not already selected. Returns whether it was added.
    pub fn add(&mut self, id: ObjectId) -> bool {
        if self.contains(id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    pub fn remove(&mut self, id: ObjectId) -> bool {
        let before = self.ids.len();
        self.ids.retain(|s| *s != id);
        self.ids.len() != before
    }

    /// Replace the selection with exactly `id`.
    pub fn replace(&mut self, id: ObjectId) {
        self.ids.clear();
        self.ids.push(id);
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    #[must_use]
    pub fn contains(&self, id: ObjectId) -> bool {
        self.ids.contains(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = ObjectId> + '_ {
        self.ids.iter().copied()
    }
}
