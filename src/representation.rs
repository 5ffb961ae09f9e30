//! Editor-side wrapper around one scene object.
//!
//! An [`ObjectRepresentation`] pairs a shared scene object with its resolved
//! adapter and carries the transient state of the gesture in progress: the
//! transform captured when the object was anchored, the pointer's grab
//! offsets, and whether the pointer currently hovers one of its handles.
//!
//! All coordinates are world space. Callers convert screen points through
//! the viewport before calling in.

#[cfg(test)]
#[path = "representation_test.rs"]
mod representation_test;

use std::rc::Rc;

use uuid::Uuid;

use crate::action::EditorAction;
use crate::camera::{Point, Rect};
use crate::consts::{HANDLE_SIZE, MIN_OBJECT_SIZE, ROTATE_HANDLE_OFFSET, ROTATE_HANDLE_REST_DEG};
use crate::error::EditorError;
use crate::input::NumericField;
use crate::support::{Capabilities, Capability, ErasedSupport, SharedObject};

/// Unique identifier for a representation within one editor.
pub type ObjectId = Uuid;

/// Value snapshot of an object's editable attributes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Transform {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Degrees.
    pub rotation: f64,
}

impl Transform {
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    #[must_use]
    pub fn center(&self) -> Point {
        self.bounds().center()
    }

    #[must_use]
    pub fn position_differs(&self, other: &Self) -> bool {
        self.x != other.x || self.y != other.y
    }

    #[must_use]
    pub fn size_differs(&self, other: &Self) -> bool {
        self.width != other.width || self.height != other.height
    }

    #[must_use]
    pub fn rotation_differs(&self, other: &Self) -> bool {
        self.rotation != other.rotation
    }
}

/// Handle geometry and scale limits shared by hit-testing and drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleConfig {
    /// Side of the scale handle square; diameter of the rotate handle.
    pub handle_size: f64,
    /// Gap between the top edge and the rotate handle centre.
    pub rotate_offset: f64,
    /// Smallest width/height a scale drag may produce.
    pub min_size: f64,
}

impl Default for HandleConfig {
    fn default() -> Self {
        Self { handle_size: HANDLE_SIZE, rotate_offset: ROTATE_HANDLE_OFFSET, min_size: MIN_OBJECT_SIZE }
    }
}

/// Normalize an angle in degrees to `[0, 360)`.
#[must_use]
pub fn normalize_degrees(degrees: f64) -> f64 {
    let d = degrees.rem_euclid(360.0);
    if d >= 360.0 { 0.0 } else { d }
}

/// One editable object: the shared scene object, its adapter, and gesture state.
pub struct ObjectRepresentation {
    id: ObjectId,
    object: SharedObject,
    support: Rc<dyn ErasedSupport>,
    handles: HandleConfig,
    /// Transform captured by the last `set_values`.
    anchor: Option<Transform>,
    /// Pointer minus origin at anchor time.
    grab_offset: Point,
    /// Scale corner minus pointer at anchor time.
    corner_offset: Point,
    in_rotate_area: bool,
    in_scale_area: bool,
}

impl std::fmt::Debug for ObjectRepresentation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObjectRepresentation")
            .field("id", &self.id)
            .field("support", &self.support)
            .field("transform", &self.transform())
            .field("anchor", &self.anchor)
            .finish_non_exhaustive()
    }
}

impl ObjectRepresentation {
    /// Wrap `object` with `support`.
    ///
    /// # Errors
    ///
    /// [`EditorError::UnsupportedType`] when the adapter cannot reach its
    /// type inside `object`.
    pub fn new(object: SharedObject, support: Rc<dyn ErasedSupport>, handles: HandleConfig) -> Result<Self, EditorError> {
        if support.read(&*object.borrow()).is_none() {
            return Err(EditorError::UnsupportedType { type_name: object.borrow().type_key().name() });
        }
        Ok(Self {
            id: Uuid::new_v4(),
            object,
            support,
            handles,
            anchor: None,
            grab_offset: Point::default(),
            corner_offset: Point::default(),
            in_rotate_area: false,
            in_scale_area: false,
        })
    }

    #[must_use]
    pub fn id(&self) -> ObjectId {
        self.id
    }

    #[must_use]
    pub fn object(&self) -> &SharedObject {
        &self.object
    }

    #[must_use]
    pub fn support(&self) -> &Rc<dyn ErasedSupport> {
        &self.support
    }

    #[must_use]
    pub fn capabilities(&self) -> Capabilities {
        self.support.capabilities()
    }

    #[must_use]
    pub fn supports(&self, capability: Capability) -> bool {
        self.capabilities().supports(capability)
    }

    #[must_use]
    pub fn is_moving_supported(&self) -> bool {
        self.supports(Capability::Move)
    }

    #[must_use]
    pub fn is_scaling_supported(&self) -> bool {
        self.supports(Capability::Scale)
    }

    #[must_use]
    pub fn is_rotating_supported(&self) -> bool {
        self.supports(Capability::Rotate)
    }

    /// Current live transform, read through the adapter.
    #[must_use]
    pub fn transform(&self) -> Transform {
        self.support.read(&*self.object.borrow()).unwrap_or_default()
    }

    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.transform().bounds()
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.transform().width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.transform().height
    }

    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    // --- Handles ---

    /// Scale handle square, centred on the far corner.
    #[must_use]
    pub fn scale_handle_rect(&self) -> Rect {
        let b = self.bounds();
        Rect::centered(Point::new(b.x + b.width, b.y + b.height), self.handles.handle_size)
    }

    /// Rotate handle centre, `rotate_offset` beyond the edge the handle rests on,
    /// swung about the centre by the current rotation.
    #[must_use]
    pub fn rotate_handle_center(&self) -> Point {
        let t = self.transform();
        let c = t.center();
        let reach = t.height / 2.0 + self.handles.rotate_offset;
        let (sin, cos) = (ROTATE_HANDLE_REST_DEG + t.rotation).to_radians().sin_cos();
        Point::new(c.x + reach * cos, c.y + reach * sin)
    }

    #[must_use]
    pub fn rotate_handle_radius(&self) -> f64 {
        self.handles.handle_size / 2.0
    }

    /// Refresh the hover flags. Handles of unsupported edits never register.
    pub fn mouse_moved(&mut self, p: Point) {
        self.in_scale_area = self.is_scaling_supported() && self.scale_handle_rect().contains(p);
        let c = self.rotate_handle_center();
        self.in_rotate_area =
            self.is_rotating_supported() && (p.x - c.x).hypot(p.y - c.y) <= self.rotate_handle_radius();
    }

    #[must_use]
    pub fn is_pointer_inside_rotate_area(&self) -> bool {
        self.in_rotate_area
    }

    #[must_use]
    pub fn is_pointer_inside_scale_area(&self) -> bool {
        self.in_scale_area
    }

    #[must_use]
    pub fn is_pointer_inside_handle(&self) -> bool {
        self.in_rotate_area || self.in_scale_area
    }

    /// Forget hover state, e.g. when the object becomes newly selected.
    pub fn clear_hover(&mut self) {
        self.in_rotate_area = false;
        self.in_scale_area = false;
    }

    // --- Gesture ---

    /// Anchor a gesture at `p`: snapshot the transform and the pointer offsets.
    pub fn set_values(&mut self, p: Point) {
        let t = self.transform();
        self.anchor = Some(t);
        self.grab_offset = Point::new(p.x - t.x, p.y - t.y);
        self.corner_offset = Point::new(t.x + t.width - p.x, t.y + t.height - p.y);
    }

    /// Transform captured by the last [`set_values`](Self::set_values).
    #[must_use]
    pub fn anchor(&self) -> Option<Transform> {
        self.anchor
    }

    /// Move so the origin keeps its anchor-time offset from `p`.
    pub fn dragged_move(&mut self, p: Point) -> bool {
        if !self.is_moving_supported() {
            return false;
        }
        let t = self.transform();
        let x = p.x - self.grab_offset.x;
        let y = p.y - self.grab_offset.y;
        if x == t.x && y == t.y {
            return false;
        }
        self.support.write_position(&mut *self.object.borrow_mut(), x, y)
    }

    /// Resize so the scale corner follows `p`, clamped to the minimum size.
    pub fn dragged_scale(&mut self, p: Point) -> bool {
        if !self.is_scaling_supported() {
            return false;
        }
        let t = self.transform();
        let width = (p.x - t.x + self.corner_offset.x).max(self.handles.min_size);
        let height = (p.y - t.y + self.corner_offset.y).max(self.handles.min_size);
        if width == t.width && height == t.height {
            return false;
        }
        self.support.write_size(&mut *self.object.borrow_mut(), width, height)
    }

    /// Rotate so the rotate handle points at `p`.
    pub fn dragged_rotate(&mut self, p: Point) -> bool {
        if !self.is_rotating_supported() {
            return false;
        }
        let t = self.transform();
        let c = t.center();
        let angle = normalize_degrees((p.y - c.y).atan2(p.x - c.x).to_degrees() - ROTATE_HANDLE_REST_DEG);
        if angle == t.rotation {
            return false;
        }
        self.support.write_rotation(&mut *self.object.borrow_mut(), angle)
    }

    /// Set one attribute directly, as keyboard entry does. Returns whether it changed.
    pub fn set_attribute(&mut self, field: NumericField, value: f64) -> bool {
        if !self.supports(field.capability()) {
            return false;
        }
        let t = self.transform();
        let mut obj = self.object.borrow_mut();
        match field {
            NumericField::X if value != t.x => self.support.write_position(&mut *obj, value, t.y),
            NumericField::Y if value != t.y => self.support.write_position(&mut *obj, t.x, value),
            NumericField::Width => {
                let width = value.max(self.handles.min_size);
                width != t.width && self.support.write_size(&mut *obj, width, t.height)
            }
            NumericField::Height => {
                let height = value.max(self.handles.min_size);
                height != t.height && self.support.write_size(&mut *obj, t.width, height)
            }
            NumericField::Rotation => {
                let rotation = normalize_degrees(value);
                rotation != t.rotation && self.support.write_rotation(&mut *obj, rotation)
            }
            NumericField::X | NumericField::Y => false,
        }
    }

    /// Write the attribute groups of `t` this object supports.
    pub fn apply_transform(&mut self, t: Transform) {
        let caps = self.capabilities();
        let mut obj = self.object.borrow_mut();
        if caps.moving {
            self.support.write_position(&mut *obj, t.x, t.y);
        }
        if caps.scaling {
            self.support.write_size(&mut *obj, t.width, t.height);
        }
        if caps.rotating {
            self.support.write_rotation(&mut *obj, t.rotation);
        }
    }

    /// Action from `before` to the live transform.
    #[must_use]
    pub fn action_since(&self, before: Transform) -> EditorAction {
        EditorAction::new(self.id, Rc::clone(&self.object), Rc::clone(&self.support), before, self.transform())
    }

    /// Action from the anchor-time transform to the live one.
    ///
    /// Without an anchor the action is a no-op at the current transform.
    #[must_use]
    pub fn last_editor_action(&self) -> EditorAction {
        self.action_since(self.anchor.unwrap_or_else(|| self.transform()))
    }
}
