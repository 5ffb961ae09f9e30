//! Overlay decorations handed to the host's renderer.
//!
//! The editor does not draw. Each frame it builds an [`Overlay`] describing
//! outlines, handles and the status readout, and passes it to whatever
//! [`OverlayRenderer`] the host supplies. Nothing flows back.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::camera::{Point, Rect};
use crate::hit::Selection;
use crate::representation::{ObjectId, ObjectRepresentation};

/// Bounding outline of one object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outline {
    pub id: ObjectId,
    pub bounds: Rect,
    /// Degrees.
    pub rotation: f64,
    pub selected: bool,
}

/// Scale handle of a selected object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleHandle {
    pub id: ObjectId,
    pub rect: Rect,
    pub hovered: bool,
}

/// Rotate handle of a selected object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotateHandle {
    pub id: ObjectId,
    pub center: Point,
    pub radius: f64,
    pub hovered: bool,
}

/// Status readout.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Hud {
    pub object_count: usize,
    pub selected_count: usize,
    pub camera_locked: bool,
    pub dirty: bool,
    pub can_undo: bool,
    pub can_redo: bool,
    /// Text of an active keyboard numeric entry.
    pub numeric_prompt: Option<String>,
}

/// Everything the renderer draws for one frame, in world coordinates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overlay {
    pub outlines: Vec<Outline>,
    pub scale_handles: Vec<ScaleHandle>,
    pub rotate_handles: Vec<RotateHandle>,
    pub hud: Hud,
}

/// Consumer of overlays.
pub trait OverlayRenderer {
    fn draw(&mut self, overlay: &Overlay);
}

/// Build the overlay for `objects`. Handles are only emitted for selected
/// objects and only for edits they support.
#[must_use]
pub fn build_overlay(objects: &[ObjectRepresentation], selection: &Selection, hud: Hud) -> Overlay {
    let mut overlay = Overlay { hud, ..Default::default() };
    for orep in objects {
        let t = orep.transform();
        let selected = selection.contains(orep.id());
        overlay.outlines.push(Outline { id: orep.id(), bounds: t.bounds(), rotation: t.rotation, selected });
        if !selected {
            continue;
        }
        if orep.is_scaling_supported() {
            overlay.scale_handles.push(ScaleHandle {
                id: orep.id(),
                rect: orep.scale_handle_rect(),
                hovered: orep.is_pointer_inside_scale_area(),
            });
        }
        if orep.is_rotating_supported() {
            overlay.rotate_handles.push(RotateHandle {
                id: orep.id(),
                center: orep.rotate_handle_center(),
                radius: orep.rotate_handle_radius(),
                hovered: orep.is_pointer_inside_rotate_area(),
            });
        }
    }
    overlay
}
