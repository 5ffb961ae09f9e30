//! Shared numeric constants for the scene editor.

// ── Handles ─────────────────────────────────────────────────────

/// Side length of the square scale handle, in world units.
pub const HANDLE_SIZE: f64 = 8.0;

/// Distance from the top edge of the bounding box to the rotate handle centre, in world units.
pub const ROTATE_HANDLE_OFFSET: f64 = 24.0;

/// Direction of the rotate handle from the object centre at zero rotation, in degrees.
pub const ROTATE_HANDLE_REST_DEG: f64 = 90.0;

// ── Geometry ────────────────────────────────────────────────────

/// Smallest width or height a scale drag may produce.
pub const MIN_OBJECT_SIZE: f64 = 1.0;

// ── Camera ──────────────────────────────────────────────────────

/// Lower zoom bound for the editor camera.
pub const ZOOM_MIN: f64 = 0.1;

/// Upper zoom bound for the editor camera.
pub const ZOOM_MAX: f64 = 10.0;

/// Zoom change per pixel of wheel delta.
pub const ZOOM_SENSITIVITY: f64 = 0.001;

// ── History ─────────────────────────────────────────────────────

/// Default cap on undo batches kept in memory.
pub const DEFAULT_HISTORY_LIMIT: usize = 100;
