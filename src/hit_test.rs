use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::builtin::{Sprite, register_builtin};
use crate::representation::HandleConfig;
use crate::support::SupportRegistry;

fn reps(rects: &[(f64, f64, f64, f64)]) -> Vec<ObjectRepresentation> {
    let mut registry = SupportRegistry::new();
    register_builtin(&mut registry);
    rects
        .iter()
        .map(|&(x, y, w, h)| {
            let obj = Rc::new(RefCell::new(Sprite::new(x, y, w, h)));
            let support = registry.resolve_for(&*obj.borrow()).unwrap();
            ObjectRepresentation::new(obj, support, HandleConfig::default()).unwrap()
        })
        .collect()
}

// =============================================================
// find_smallest_at
// =============================================================

#[test]
fn nested_object_wins_over_container() {
    let objects = reps(&[(0.0, 0.0, 100.0, 100.0), (0.0, 0.0, 10.0, 10.0)]);
    let hit = find_smallest_at(&objects, Point::new(5.0, 5.0)).unwrap();
    assert_eq!(hit.id(), objects[1].id());
}

#[test]
fn container_hit_outside_nested_object() {
    let objects = reps(&[(0.0, 0.0, 100.0, 100.0), (0.0, 0.0, 10.0, 10.0)]);
    let hit = find_smallest_at(&objects, Point::new(50.0, 50.0)).unwrap();
    assert_eq!(hit.id(), objects[0].id());
}

#[test]
fn equal_areas_pick_first_added() {
    let objects = reps(&[(0.0, 0.0, 10.0, 20.0), (0.0, 0.0, 20.0, 10.0)]);
    let hit = find_smallest_at(&objects, Point::new(5.0, 5.0)).unwrap();
    assert_eq!(hit.id(), objects[0].id());
}

#[test]
fn miss_returns_none() {
    let objects = reps(&[(0.0, 0.0, 10.0, 10.0)]);
    assert!(find_smallest_at(&objects, Point::new(11.0, 5.0)).is_none());
    assert!(find_smallest_at(&[], Point::new(0.0, 0.0)).is_none());
}

// =============================================================
// Selection
// =============================================================

#[test]
fn selection_add_is_idempotent() {
    let id = ObjectId::new_v4();
    let mut selection = Selection::new();
    assert!(selection.add(id));
    assert!(!selection.add(id));
    assert_eq!(selection.len(), 1);
}

#[test]
fn selection_replace_and_remove() {
    let (a, b) = (ObjectId::new_v4(), ObjectId::new_v4());
    let mut selection = Selection::new();
    selection.add(a);
    selection.add(b);
    assert_eq!(selection.iter().collect::<Vec<_>>(), vec![a, b]);

    selection.replace(b);
    assert!(!selection.contains(a));
    assert!(selection.contains(b));

    assert!(selection.remove(b));
    assert!(!selection.remove(b));
    assert!(selection.is_empty());
}

#[test]
fn selection_clear() {
    let mut selection = Selection::new();
    selection.add(ObjectId::new_v4());
    selection.clear();
    assert!(selection.is_empty());
}
