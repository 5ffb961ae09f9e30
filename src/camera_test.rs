#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn point_approx_eq(a: Point, b: Point) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

// =============================================================
// Rect
// =============================================================

#[test]
fn rect_contains_is_inclusive() {
    let r = Rect::new(0.0, 0.0, 10.0, 10.0);
    assert!(r.contains(Point::new(0.0, 0.0)));
    assert!(r.contains(Point::new(10.0, 10.0)));
    assert!(r.contains(Point::new(5.0, 5.0)));
    assert!(!r.contains(Point::new(10.1, 5.0)));
    assert!(!r.contains(Point::new(5.0, -0.1)));
}

#[test]
fn rect_centered_square() {
    let r = Rect::centered(Point::new(10.0, 20.0), 4.0);
    assert_eq!(r, Rect::new(8.0, 18.0, 4.0, 4.0));
    assert!(point_approx_eq(r.center(), Point::new(10.0, 20.0)));
}

#[test]
fn rect_area() {
    assert_eq!(Rect::new(3.0, 4.0, 10.0, 2.5).area(), 25.0);
}

// =============================================================
// Conversions
// =============================================================

#[test]
fn default_camera_is_identity() {
    let cam = Camera::default();
    let p = Point::new(12.0, -7.0);
    assert!(point_approx_eq(cam.screen_to_world(p), p));
    assert!(point_approx_eq(cam.world_to_screen(p), p));
}

#[test]
fn screen_world_roundtrip_with_pan_and_zoom() {
    let cam = Camera::new(CameraState { pan_x: 40.0, pan_y: -15.0, zoom: 2.5 });
    let world = Point::new(3.0, 9.0);
    let back = cam.screen_to_world(cam.world_to_screen(world));
    assert!(point_approx_eq(back, world));
}

// =============================================================
// Zoom / pan
// =============================================================

#[test]
fn zoom_keeps_anchor_fixed() {
    let mut cam = Camera::default();
    let anchor = Point::new(200.0, 100.0);
    let before = cam.screen_to_world(anchor);
    assert!(cam.zoom_at(anchor, -100.0));
    let after = cam.screen_to_world(anchor);
    assert!(point_approx_eq(before, after));
    assert!(cam.state().zoom > 1.0);
}

#[test]
fn zoom_is_clamped() {
    let mut cam = Camera::default();
    for _ in 0..200 {
        cam.zoom_at(Point::default(), -1000.0);
    }
    assert!(approx_eq(cam.state().zoom, ZOOM_MAX));
    assert!(!cam.zoom_at(Point::default(), -1000.0));
}

#[test]
fn pan_moves_view() {
    let mut cam = Camera::default();
    assert!(cam.pan_by(5.0, -3.0));
    assert_eq!(cam.state().pan_x, 5.0);
    assert_eq!(cam.state().pan_y, -3.0);
}

#[test]
fn zero_pan_reports_unchanged() {
    let mut cam = Camera::default();
    assert!(!cam.pan_by(0.0, 0.0));
}

// =============================================================
// Host / editor view swap
// =============================================================

#[test]
fn leaving_editor_restores_host_view() {
    let host = CameraState { pan_x: 10.0, pan_y: 20.0, zoom: 1.5 };
    let mut cam = Camera::new(host);
    cam.enter_editor();
    cam.pan_by(100.0, 100.0);
    cam.leave_editor();
    assert_eq!(cam.state(), host);
}

#[test]
fn reentering_editor_restores_editor_view() {
    let mut cam = Camera::default();
    cam.enter_editor();
    cam.pan_by(30.0, 0.0);
    let editor_view = cam.state();
    cam.leave_editor();
    cam.enter_editor();
    assert_eq!(cam.state(), editor_view);
}

#[test]
fn reset_returns_to_host_view_while_editing() {
    let host = CameraState { pan_x: 1.0, pan_y: 2.0, zoom: 1.0 };
    let mut cam = Camera::new(host);
    cam.enter_editor();
    cam.pan_by(50.0, 50.0);
    cam.reset();
    assert_eq!(cam.state(), host);
}
