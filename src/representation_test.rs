#![allow(clippy::float_cmp)]

use std::cell::RefCell;

use super::*;
use crate::builtin::{Sprite, register_builtin};
use crate::support::SupportRegistry;

// =============================================================
// Helpers
// =============================================================

fn sprite(x: f64, y: f64, w: f64, h: f64) -> Rc<RefCell<Sprite>> {
    Rc::new(RefCell::new(Sprite::new(x, y, w, h)))
}

fn rep(obj: &Rc<RefCell<Sprite>>) -> ObjectRepresentation {
    let mut registry = SupportRegistry::new();
    register_builtin(&mut registry);
    let support = registry.resolve_for(&*obj.borrow()).unwrap();
    ObjectRepresentation::new(obj.clone(), support, HandleConfig::default()).unwrap()
}

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn near(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
}

// =============================================================
// Construction and geometry
// =============================================================

#[test]
fn new_rejects_support_for_other_type() {
    let mut registry = SupportRegistry::new();
    register_builtin(&mut registry);
    let actor_support = registry.resolve(crate::support::TypeKey::root::<crate::builtin::Actor>()).unwrap();
    let result = ObjectRepresentation::new(sprite(0.0, 0.0, 1.0, 1.0), actor_support, HandleConfig::default());
    assert!(matches!(result, Err(EditorError::UnsupportedType { .. })));
}

#[test]
fn ids_are_unique() {
    let s = sprite(0.0, 0.0, 10.0, 10.0);
    assert_ne!(rep(&s).id(), rep(&s).id());
}

#[test]
fn transform_reads_live_values() {
    let s = sprite(1.0, 2.0, 3.0, 4.0);
    let r = rep(&s);
    s.borrow_mut().x = 9.0;
    assert_eq!(r.transform().x, 9.0);
    assert_eq!((r.width(), r.height()), (3.0, 4.0));
}

#[test]
fn contains_is_inclusive_on_edges() {
    let r = rep(&sprite(0.0, 0.0, 10.0, 10.0));
    assert!(r.contains(pt(0.0, 0.0)));
    assert!(r.contains(pt(10.0, 10.0)));
    assert!(!r.contains(pt(10.5, 5.0)));
}

#[test]
fn handle_geometry() {
    let r = rep(&sprite(0.0, 0.0, 50.0, 20.0));
    assert_eq!(r.scale_handle_rect(), Rect::new(46.0, 16.0, 8.0, 8.0));
    assert!(near(r.rotate_handle_center(), pt(25.0, 44.0)));
    assert_eq!(r.rotate_handle_radius(), 4.0);
}

#[test]
fn rotate_handle_follows_rotation() {
    let s = sprite(0.0, 0.0, 20.0, 20.0);
    let r = rep(&s);
    s.borrow_mut().rotation = 90.0;
    assert!(near(r.rotate_handle_center(), pt(-24.0, 10.0)));
    s.borrow_mut().rotation = 180.0;
    assert!(near(r.rotate_handle_center(), pt(10.0, -24.0)));
}

#[test]
fn normalize_degrees_wraps() {
    assert_eq!(normalize_degrees(370.0), 10.0);
    assert_eq!(normalize_degrees(-90.0), 270.0);
    assert_eq!(normalize_degrees(360.0), 0.0);
}

// =============================================================
// Hover flags
// =============================================================

#[test]
fn mouse_moved_sets_scale_flag() {
    let mut r = rep(&sprite(0.0, 0.0, 50.0, 50.0));
    r.mouse_moved(pt(52.0, 48.0));
    assert!(r.is_pointer_inside_scale_area());
    assert!(!r.is_pointer_inside_rotate_area());
    assert!(r.is_pointer_inside_handle());

    r.mouse_moved(pt(10.0, 10.0));
    assert!(!r.is_pointer_inside_handle());
}

#[test]
fn mouse_moved_sets_rotate_flag() {
    let mut r = rep(&sprite(0.0, 0.0, 50.0, 50.0));
    r.mouse_moved(pt(27.0, 75.0));
    assert!(r.is_pointer_inside_rotate_area());
    assert!(!r.is_pointer_inside_scale_area());
}

#[test]
fn clear_hover_resets_flags() {
    let mut r = rep(&sprite(0.0, 0.0, 50.0, 50.0));
    r.mouse_moved(pt(50.0, 50.0));
    r.clear_hover();
    assert!(!r.is_pointer_inside_handle());
}

// =============================================================
// Drags
// =============================================================

#[test]
fn dragged_move_keeps_grab_offset() {
    let s = sprite(10.0, 10.0, 20.0, 20.0);
    let mut r = rep(&s);
    r.set_values(pt(15.0, 12.0));
    assert!(r.dragged_move(pt(25.0, 17.0)));
    assert_eq!((s.borrow().x, s.borrow().y), (20.0, 15.0));
}

#[test]
fn dragged_move_to_same_point_reports_no_change() {
    let s = sprite(10.0, 10.0, 20.0, 20.0);
    let mut r = rep(&s);
    r.set_values(pt(15.0, 12.0));
    assert!(!r.dragged_move(pt(15.0, 12.0)));
}

#[test]
fn dragged_scale_follows_corner() {
    let s = sprite(0.0, 0.0, 20.0, 20.0);
    let mut r = rep(&s);
    r.set_values(pt(19.0, 21.0));
    assert!(r.dragged_scale(pt(29.0, 31.0)));
    assert_eq!((s.borrow().width, s.borrow().height), (30.0, 30.0));
}

#[test]
fn dragged_scale_clamps_to_min_size() {
    let s = sprite(0.0, 0.0, 20.0, 20.0);
    let mut r = rep(&s);
    r.set_values(pt(20.0, 20.0));
    r.dragged_scale(pt(-50.0, 5.0));
    assert_eq!((s.borrow().width, s.borrow().height), (MIN_OBJECT_SIZE, 5.0));
}

#[test]
fn dragged_rotate_points_handle_at_pointer() {
    let s = sprite(0.0, 0.0, 20.0, 20.0);
    let mut r = rep(&s);
    r.set_values(pt(10.0, 34.0));
    // Pointer straight above the centre: handle swung half a turn.
    assert!(r.dragged_rotate(pt(10.0, -40.0)));
    assert!((s.borrow().rotation - 180.0).abs() < 1e-9);
}

#[test]
fn dragged_rotate_at_rest_direction_is_zero() {
    let s = sprite(0.0, 0.0, 20.0, 20.0);
    let mut r = rep(&s);
    r.set_values(pt(10.0, 34.0));
    assert!(!r.dragged_rotate(pt(10.0, 60.0)));
    assert_eq!(s.borrow().rotation, 0.0);
}

#[test]
fn grabbing_rotated_handle_keeps_rotation() {
    let s = sprite(0.0, 0.0, 20.0, 20.0);
    s.borrow_mut().rotation = 90.0;
    let mut r = rep(&s);
    r.mouse_moved(pt(-24.0, 10.0));
    assert!(r.is_pointer_inside_rotate_area());

    r.set_values(pt(-24.0, 10.0));
    r.dragged_rotate(pt(-24.0, 10.1));
    assert!((s.borrow().rotation - 90.0).abs() < 1.0);
}

// =============================================================
// Attributes and actions
// =============================================================

#[test]
fn set_attribute_writes_single_field() {
    let s = sprite(1.0, 2.0, 3.0, 4.0);
    let mut r = rep(&s);
    assert!(r.set_attribute(NumericField::Y, 20.0));
    assert!(r.set_attribute(NumericField::Width, 0.0));
    assert!(r.set_attribute(NumericField::Rotation, -45.0));
    let t = r.transform();
    assert_eq!((t.x, t.y, t.width, t.height, t.rotation), (1.0, 20.0, MIN_OBJECT_SIZE, 4.0, 315.0));
    assert!(!r.set_attribute(NumericField::X, 1.0));
}

#[test]
fn last_editor_action_spans_anchor_to_live() {
    let s = sprite(0.0, 0.0, 10.0, 10.0);
    let mut r = rep(&s);
    r.set_values(pt(5.0, 5.0));
    r.dragged_move(pt(8.0, 9.0));
    let action = r.last_editor_action();
    assert_eq!(action.target(), r.id());
    assert_eq!((action.before().x, action.before().y), (0.0, 0.0));
    assert_eq!((action.after().x, action.after().y), (3.0, 4.0));
}

#[test]
fn last_editor_action_without_anchor_is_noop() {
    let r = rep(&sprite(0.0, 0.0, 10.0, 10.0));
    assert!(r.anchor().is_none());
    assert!(r.last_editor_action().is_noop());
}

#[test]
fn apply_transform_writes_all_groups() {
    let s = sprite(0.0, 0.0, 10.0, 10.0);
    let mut r = rep(&s);
    r.apply_transform(Transform { x: 1.0, y: 2.0, width: 3.0, height: 4.0, rotation: 5.0 });
    assert_eq!(*s.borrow(), Sprite { x: 1.0, y: 2.0, width: 3.0, height: 4.0, rotation: 5.0 });
}
