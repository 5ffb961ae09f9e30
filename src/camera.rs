//! Geometry primitives and the viewport contract.
//!
//! The editor never projects coordinates itself. Every pointer event arrives
//! in screen space and is converted through a [`Viewport`], which the host
//! may implement however its camera works. [`Camera`] is the default pan/zoom
//! implementation used when the host has no camera of its own to plug in.

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use crate::consts::{ZOOM_MAX, ZOOM_MIN, ZOOM_SENSITIVITY};

/// A point in either screen or world space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle anchored at its minimum corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Square of side `size` centred on `center`.
    #[must_use]
    pub fn centered(center: Point, size: f64) -> Self {
        let half = size / 2.0;
        Self { x: center.x - half, y: center.y - half, width: size, height: size }
    }

    /// Inclusive containment test.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.x + self.width && p.y >= self.y && p.y <= self.y + self.height
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// Screen/world conversion plus the camera controls the editor routes input to.
///
/// Implementations return `true` from the mutating methods when the view
/// actually changed, so the editor can report it to the host.
pub trait Viewport {
    /// Convert a screen-space point to world coordinates.
    fn screen_to_world(&self, screen: Point) -> Point;

    /// Convert a world-space point to screen coordinates.
    fn world_to_screen(&self, world: Point) -> Point;

    /// Zoom in response to a wheel delta, keeping `screen` fixed.
    fn zoom_at(&mut self, screen: Point, wheel_dy: f64) -> bool;

    /// Pan by a screen-space delta.
    fn pan_by(&mut self, dx: f64, dy: f64) -> bool;

    /// Called when edit mode is entered.
    fn enter_editor(&mut self) {}

    /// Called when edit mode is left.
    fn leave_editor(&mut self) {}

    /// Restore the host's view inside the editor.
    fn reset(&mut self) {}
}

/// Pan/zoom state of a camera.
///
/// `pan_x` / `pan_y` are in screen pixels.
/// `zoom` is a scale factor (1.0 = no zoom).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    pub pan_x: f64,
    pub pan_y: f64,
    pub zoom: f64,
}

impl Default for CameraState {
    fn default() -> Self {
        Self { pan_x: 0.0, pan_y: 0.0, zoom: 1.0 }
    }
}

/// Default [`Viewport`] with separate host and editor views.
///
/// While editing, the camera shows the editor's own view so panning around
/// the scene never disturbs what the host had on screen. Leaving edit mode
/// swaps the host view back in.
#[derive(Debug, Clone, Default)]
pub struct Camera {
    current: CameraState,
    /// The view not currently shown: the host view while editing, the editor view otherwise.
    stashed: Option<CameraState>,
    /// The host view captured when editing began; target of `reset`.
    host: CameraState,
}

impl Camera {
    #[must_use]
    pub fn new(state: CameraState) -> Self {
        Self { current: state, stashed: None, host: state }
    }

    /// The view currently in effect.
    #[must_use]
    pub fn state(&self) -> CameraState {
        self.current
    }
}

impl Viewport for Camera {
    fn screen_to_world(&self, screen: Point) -> Point {
        Point {
            x: (screen.x - self.current.pan_x) / self.current.zoom,
            y: (screen.y - self.current.pan_y) / self.current.zoom,
        }
    }

    fn world_to_screen(&self, world: Point) -> Point {
        Point {
            x: world.x * self.current.zoom + self.current.pan_x,
            y: world.y * self.current.zoom + self.current.pan_y,
        }
    }

    fn zoom_at(&mut self, screen: Point, wheel_dy: f64) -> bool {
        let old = self.current.zoom;
        let new = (old * (1.0 - wheel_dy * ZOOM_SENSITIVITY)).clamp(ZOOM_MIN, ZOOM_MAX);
        if (new - old).abs() < f64::EPSILON {
            return false;
        }
        let anchor = self.screen_to_world(screen);
        self.current.zoom = new;
        self.current.pan_x = screen.x - anchor.x * new;
        self.current.pan_y = screen.y - anchor.y * new;
        true
    }

    fn pan_by(&mut self, dx: f64, dy: f64) -> bool {
        if dx == 0.0 && dy == 0.0 {
            return false;
        }
        self.current.pan_x += dx;
        self.current.pan_y += dy;
        true
    }

    fn enter_editor(&mut self) {
        self.host = self.current;
        let editor_view = self.stashed.unwrap_or(self.current);
        self.stashed = Some(self.current);
        self.current = editor_view;
    }

    fn leave_editor(&mut self) {
        let host_view = self.stashed.unwrap_or(self.host);
        self.stashed = Some(self.current);
        self.current = host_view;
    }

    fn reset(&mut self) {
        self.current = self.host;
    }
}
