//! The editor: object bookkeeping plus the input state machine.
//!
//! The host feeds raw pointer and key events in screen coordinates. The
//! editor converts them through its [`Viewport`], drives selection and drag
//! gestures on the [`ObjectRepresentation`]s, records one [`ActionBatch`]
//! per finished gesture, and persists through its [`SceneStore`].
//!
//! Edit mode moves between three states (see [`EditMode`]):
//!
//! - `Idle`: editing off, every event except the toggle key passes through.
//! - `Editing`: pointer gestures select, move, scale and rotate.
//! - `NumericEntry`: a value is being typed for one attribute of the
//!   selection. Any pointer press, drag or release commits it first.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use std::collections::BTreeMap;
use std::rc::Rc;

use tracing::{debug, info, warn};

use crate::action::ActionBatch;
use crate::builtin::register_builtin;
use crate::camera::{Camera, Point, Viewport};
use crate::config::EditorConfig;
use crate::error::EditorError;
use crate::hit::{Selection, find_smallest_at};
use crate::history::History;
use crate::input::{Button, EditMode, Handled, Key, Modifiers, NumericField, WheelDelta};
use crate::numeric::{EntryKey, NumericEntry};
use crate::persist::{SceneSnapshot, SceneStore};
use crate::render::{Hud, Overlay, OverlayRenderer, build_overlay};
use crate::representation::{ObjectId, ObjectRepresentation};
use crate::support::{SceneObject, SharedObject, Support, SupportRegistry};

/// In-application scene editor.
pub struct Editor {
    config: EditorConfig,
    registry: SupportRegistry,
    /// Representations in insertion order; hit-test ties go to the earliest.
    objects: Vec<ObjectRepresentation>,
    identifiers: BTreeMap<String, ObjectId>,
    selection: Selection,
    history: History,
    mode: EditMode,
    viewport: Box<dyn Viewport>,
    store: Box<dyn SceneStore>,
    dirty: bool,
    camera_locked: bool,
    primary_down: bool,
    /// Screen position of the previous pointer event during a primary drag.
    last_screen: Option<Point>,
}

impl Editor {
    /// Editor with an empty registry and the default [`Camera`].
    #[must_use]
    pub fn new(config: EditorConfig, store: Box<dyn SceneStore>) -> Self {
        let history = History::new(config.history_limit);
        Self {
            config,
            registry: SupportRegistry::new(),
            objects: Vec::new(),
            identifiers: BTreeMap::new(),
            selection: Selection::new(),
            history,
            mode: EditMode::Idle,
            viewport: Box::new(Camera::default()),
            store,
            dirty: false,
            camera_locked: false,
            primary_down: false,
            last_screen: None,
        }
    }

    /// Replace the screen/world conversion.
    #[must_use]
    pub fn with_viewport(mut self, viewport: Box<dyn Viewport>) -> Self {
        self.viewport = viewport;
        self
    }

    /// Register the [`Sprite`](crate::builtin::Sprite) and [`Actor`](crate::builtin::Actor) adapters.
    #[must_use]
    pub fn with_builtin_supports(mut self) -> Self {
        register_builtin(&mut self.registry);
        self
    }

    // --- Registration ---

    /// Register `support` for `T`. Objects of `T` and its subtypes may then be added.
    pub fn register_support<T: SceneObject, S: Support<T>>(&mut self, support: S) -> &mut Self {
        self.registry.register::<T, S>(support);
        self
    }

    #[must_use]
    pub fn registry(&self) -> &SupportRegistry {
        &self.registry
    }

    /// Add `object` under `identifier`. Objects of unsupported types are dropped.
    pub fn add(&mut self, object: SharedObject, identifier: impl Into<String>) -> &mut Self {
        let identifier = identifier.into();
        if let Err(e) = self.try_add(object, identifier.clone()) {
            warn!(%identifier, error = %e, "object not added");
        }
        self
    }

    /// Add `object` under `identifier`, reporting why it was refused.
    ///
    /// Reusing an identifier replaces the object previously stored under it and
    /// drops that object's undo/redo history.
    ///
    /// # Errors
    ///
    /// [`EditorError::UnsupportedType`] when no adapter resolves for the object.
    pub fn try_add(&mut self, object: SharedObject, identifier: impl Into<String>) -> Result<ObjectId, EditorError> {
        let identifier = identifier.into();
        let support = {
            let obj = object.borrow();
            self.registry
                .resolve_for(&*obj)
                .ok_or(EditorError::UnsupportedType { type_name: obj.type_key().name() })?
        };
        let orep = ObjectRepresentation::new(object, support, self.config.handles)?;
        let id = orep.id();
        if let Some(old) = self.identifiers.insert(identifier.clone(), id) {
            warn!(%identifier, "identifier reused; replacing previous object");
            self.objects.retain(|o| o.id() != old);
            self.selection.remove(old);
            self.history.forget(old);
        }
        self.objects.push(orep);
        debug!(%identifier, %id, "object added");
        Ok(id)
    }

    // --- Queries ---

    #[must_use]
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    #[must_use]
    pub fn is_dev_mode(&self) -> bool {
        self.config.dev_mode
    }

    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.mode.is_editing()
    }

    #[must_use]
    pub fn mode(&self) -> &EditMode {
        &self.mode
    }

    /// Whether there are edits not yet saved.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    #[must_use]
    pub fn is_camera_locked(&self) -> bool {
        self.camera_locked
    }

    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// All representations, in insertion order.
    #[must_use]
    pub fn objects(&self) -> &[ObjectRepresentation] {
        &self.objects
    }

    #[must_use]
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    #[must_use]
    pub fn representation(&self, id: ObjectId) -> Option<&ObjectRepresentation> {
        self.objects.iter().find(|o| o.id() == id)
    }

    /// Representation of the object stored under `identifier`.
    #[must_use]
    pub fn find(&self, identifier: &str) -> Option<&ObjectRepresentation> {
        let id = self.identifiers.get(identifier)?;
        self.representation(*id)
    }

    /// Object stored under `identifier`.
    #[must_use]
    pub fn object(&self, identifier: &str) -> Option<&SharedObject> {
        self.find(identifier).map(ObjectRepresentation::object)
    }

    /// Identifier `object` was added under.
    #[must_use]
    pub fn identifier_of(&self, object: &SharedObject) -> Option<&str> {
        let orep = self.objects.iter().find(|o| Rc::ptr_eq(o.object(), object))?;
        self.identifiers
            .iter()
            .find_map(|(ident, id)| (*id == orep.id()).then_some(ident.as_str()))
    }

    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    #[must_use]
    pub fn viewport(&self) -> &dyn Viewport {
        &*self.viewport
    }

    fn selected(&self) -> impl Iterator<Item = &ObjectRepresentation> {
        let selection = &self.selection;
        self.objects.iter().filter(move |o| selection.contains(o.id()))
    }

    fn selected_mut(&mut self) -> impl Iterator<Item = &mut ObjectRepresentation> {
        let selection = &self.selection;
        self.objects.iter_mut().filter(move |o| selection.contains(o.id()))
    }

    // --- Edit mode ---

    /// Enter edit mode. No-op outside dev mode.
    pub fn enable(&mut self) {
        if !self.config.dev_mode {
            debug!("edit mode requested outside dev mode");
            return;
        }
        if self.mode.is_editing() {
            return;
        }
        self.mode = EditMode::Editing;
        self.camera_locked = false;
        self.viewport.enter_editor();
        info!(objects = self.objects.len(), "edit mode on");
    }

    /// Leave edit mode, dropping any numeric entry and saving.
    pub fn disable(&mut self) {
        if !self.mode.is_editing() {
            return;
        }
        self.cancel_numeric();
        self.mode = EditMode::Idle;
        self.primary_down = false;
        self.last_screen = None;
        self.viewport.leave_editor();
        info!("edit mode off");
        if let Err(e) = self.save() {
            warn!(error = %e, "save on leaving edit mode failed");
        }
    }

    // --- Selection ---

    /// Add `id` to the selection and anchor it at its own origin.
    pub fn select(&mut self, id: ObjectId) -> bool {
        let Some(orep) = self.objects.iter_mut().find(|o| o.id() == id) else {
            return false;
        };
        let t = orep.transform();
        orep.set_values(Point::new(t.x, t.y));
        self.selection.add(id)
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    // --- Persistence ---

    /// Attributes of every identified object.
    #[must_use]
    pub fn snapshot(&self) -> SceneSnapshot {
        let objects = self
            .identifiers
            .iter()
            .filter_map(|(ident, id)| self.representation(*id).map(|o| (ident.clone(), o.transform().into())))
            .collect();
        SceneSnapshot { objects }
    }

    /// Write the scene to the store. Clears the dirty flag on success only.
    ///
    /// # Errors
    ///
    /// [`EditorError::Persistence`] when the store fails.
    pub fn save(&mut self) -> Result<(), EditorError> {
        let snapshot = self.snapshot();
        match self.store.save(&snapshot) {
            Ok(()) => {
                self.dirty = false;
                info!(objects = snapshot.objects.len(), "scene saved");
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "scene save failed; changes remain unsaved");
                Err(e.into())
            }
        }
    }

    /// Apply the stored scene to the added objects. Returns how many were updated.
    ///
    /// Stored identifiers with no matching object are skipped. History is
    /// cleared since its snapshots no longer describe the scene.
    ///
    /// # Errors
    ///
    /// [`EditorError::Persistence`] when the store fails.
    pub fn load(&mut self) -> Result<usize, EditorError> {
        let Some(snapshot) = self.store.load()? else {
            return Ok(0);
        };
        let mut applied = 0;
        for (identifier, info) in snapshot.objects {
            let Some(id) = self.identifiers.get(&identifier).copied() else {
                warn!(%identifier, "saved object was never added; skipping");
                continue;
            };
            if let Some(orep) = self.objects.iter_mut().find(|o| o.id() == id) {
                orep.apply_transform(info.into());
                applied += 1;
            }
        }
        self.history.clear();
        info!(applied, "scene loaded");
        Ok(applied)
    }

    // --- Undo / redo ---

    /// Revert the last batch. Returns the number of objects it changed; the
    /// scene only becomes dirty when that is non-zero.
    ///
    /// # Errors
    ///
    /// [`EditorError::EmptyStack`] when there is nothing to undo.
    pub fn undo(&mut self) -> Result<usize, EditorError> {
        let result = self.history.undo();
        self.after_history_step(&result);
        result
    }

    /// Reapply the last undone batch. Returns the number of objects it changed.
    ///
    /// # Errors
    ///
    /// [`EditorError::EmptyStack`] when there is nothing to redo.
    pub fn redo(&mut self) -> Result<usize, EditorError> {
        let result = self.history.redo();
        self.after_history_step(&result);
        result
    }

    fn after_history_step(&mut self, result: &Result<usize, EditorError>) {
        match result {
            Ok(changed) if *changed > 0 => self.dirty = true,
            Ok(_) => {}
            Err(e) => warn!(error = %e, "history step refused"),
        }
    }

    fn finish_gesture(&mut self) {
        if self.selection.is_empty() {
            return;
        }
        let batch: ActionBatch = self.selected().map(ObjectRepresentation::last_editor_action).collect();
        debug!(actions = batch.len(), noop = batch.is_noop(), "gesture recorded");
        self.history.push(batch);
    }

    // --- Keyboard numeric entry ---

    /// Start typing a value for `field` of every selected object.
    ///
    /// # Errors
    ///
    /// - [`EditorError::NotEditing`] outside edit mode
    /// - [`EditorError::NothingSelected`] with an empty selection
    /// - [`EditorError::CapabilityRefused`] when any selected object lacks the capability
    pub fn begin_numeric(&mut self, field: NumericField) -> Result<(), EditorError> {
        if !self.mode.is_editing() {
            return Err(EditorError::NotEditing);
        }
        if self.selection.is_empty() {
            return Err(EditorError::NothingSelected);
        }
        let capability = field.capability();
        if self.selected().any(|o| !o.supports(capability)) {
            warn!(%capability, "some of the selected objects do not support this edit");
            return Err(EditorError::CapabilityRefused(capability));
        }
        self.mode = EditMode::NumericEntry(NumericEntry::new(field));
        debug!(field = field.label(), "numeric entry started");
        Ok(())
    }

    /// Commit an active numeric entry. Returns whether anything changed.
    ///
    /// An empty or unparsable entry is dropped without effect.
    pub fn finish_numeric(&mut self) -> bool {
        let EditMode::NumericEntry(entry) = &self.mode else {
            return false;
        };
        let field = entry.field();
        let value = entry.value();
        self.mode = EditMode::Editing;
        let Some(value) = value else {
            debug!(field = field.label(), "numeric entry had no value");
            return false;
        };

        let mut changed = false;
        let mut batch = ActionBatch::default();
        for orep in self.selected_mut() {
            let before = orep.transform();
            changed |= orep.set_attribute(field, value);
            batch.push(orep.action_since(before));
        }
        if batch.is_empty() {
            return false;
        }
        self.history.push(batch);
        if changed {
            self.dirty = true;
        }
        debug!(field = field.label(), value, changed, "numeric entry committed");
        changed
    }

    /// Drop an active numeric entry.
    pub fn cancel_numeric(&mut self) {
        if matches!(self.mode, EditMode::NumericEntry(_)) {
            self.mode = EditMode::Editing;
            debug!("numeric entry cancelled");
        }
    }

    // --- Input events ---

    pub fn on_pointer_down(&mut self, screen: Point, button: Button, modifiers: Modifiers) -> Handled {
        if !self.mode.is_editing() || button != Button::Primary {
            return Handled::ignored();
        }
        let mut changed = self.finish_numeric();
        self.primary_down = true;
        self.last_screen = Some(screen);
        let world = self.viewport.screen_to_world(screen);

        if self.config.keymap.no_select_held(modifiers) {
            changed |= !self.selection.is_empty();
            self.selection.clear();
            return Handled { consumed: false, changed };
        }

        let mut on_handle = false;
        for orep in self.selected_mut() {
            orep.mouse_moved(world);
            on_handle |= orep.is_pointer_inside_handle();
        }
        if on_handle {
            self.anchor_selection(world);
            return Handled::consumed_if(changed);
        }

        match find_smallest_at(&self.objects, world).map(ObjectRepresentation::id) {
            Some(id) => {
                self.selection.replace(id);
                if let Some(orep) = self.objects.iter_mut().find(|o| o.id() == id) {
                    orep.clear_hover();
                }
                self.anchor_selection(world);
                Handled::consumed_if(true)
            }
            None => {
                changed |= !self.selection.is_empty();
                self.selection.clear();
                Handled { consumed: false, changed }
            }
        }
    }

    fn anchor_selection(&mut self, world: Point) {
        for orep in self.selected_mut() {
            orep.set_values(world);
        }
    }

    pub fn on_pointer_move(&mut self, screen: Point, _modifiers: Modifiers) -> Handled {
        if !self.mode.is_editing() {
            return Handled::ignored();
        }
        let world = self.viewport.screen_to_world(screen);

        if !self.primary_down {
            for orep in self.selected_mut() {
                orep.mouse_moved(world);
            }
            return Handled::ignored();
        }

        let mut changed = self.finish_numeric();
        let last = self.last_screen.replace(screen);

        if !self.selection.is_empty() {
            let mut moved = false;
            for orep in self.selected_mut() {
                moved |= if orep.is_pointer_inside_rotate_area() {
                    orep.dragged_rotate(world)
                } else if orep.is_pointer_inside_scale_area() {
                    orep.dragged_scale(world)
                } else {
                    orep.dragged_move(world)
                };
            }
            if moved {
                self.dirty = true;
            }
            return Handled::consumed_if(changed || moved);
        }

        if !self.camera_locked
            && let Some(last) = last
        {
            changed |= self.viewport.pan_by(screen.x - last.x, screen.y - last.y);
            return Handled::consumed_if(changed);
        }
        Handled { consumed: false, changed }
    }

    pub fn on_pointer_up(&mut self, _screen: Point, button: Button, _modifiers: Modifiers) -> Handled {
        if !self.mode.is_editing() || button != Button::Primary {
            return Handled::ignored();
        }
        let changed = self.finish_numeric();
        let was_down = std::mem::take(&mut self.primary_down);
        self.last_screen = None;
        if was_down {
            self.finish_gesture();
        }
        Handled { consumed: false, changed }
    }

    pub fn on_wheel(&mut self, screen: Point, delta: WheelDelta, _modifiers: Modifiers) -> Handled {
        if !self.mode.is_editing() || self.camera_locked {
            return Handled::ignored();
        }
        if self.primary_down && !self.selection.is_empty() {
            return Handled::ignored();
        }
        Handled::consumed_if(self.viewport.zoom_at(screen, delta.dy))
    }

    pub fn on_key_down(&mut self, key: &Key, modifiers: Modifiers) -> Handled {
        if self.mode.is_editing() {
            let keymap = &self.config.keymap;

            let (save, undo, redo) = (key.is(&keymap.save), key.is(&keymap.undo), key.is(&keymap.redo));
            if keymap.special_held(modifiers) && (save || undo || redo) {
                let mut changed = self.finish_numeric();
                if save {
                    changed |= self.save().is_ok();
                } else if undo {
                    changed |= matches!(self.undo(), Ok(n) if n > 0);
                } else if redo {
                    changed |= matches!(self.redo(), Ok(n) if n > 0);
                }
                return Handled::consumed_if(changed);
            }

            if let EditMode::NumericEntry(entry) = &mut self.mode {
                match entry.key_down(key) {
                    EntryKey::Edited => return Handled::consumed_if(true),
                    EntryKey::Commit => return Handled::consumed_if(self.finish_numeric()),
                    EntryKey::Cancel => {
                        self.cancel_numeric();
                        return Handled::consumed_if(true);
                    }
                    EntryKey::Ignored => {}
                }
            } else {
                if key.is(&keymap.reset_camera) {
                    self.viewport.reset();
                    return Handled::consumed_if(true);
                }
                if key.is(&keymap.lock_camera) {
                    self.camera_locked = !self.camera_locked;
                    debug!(locked = self.camera_locked, "camera lock toggled");
                    return Handled::consumed_if(true);
                }
                if let Some(field) = keymap.numeric_field(key)
                    && !self.selection.is_empty()
                {
                    let started = self.begin_numeric(field).is_ok();
                    return Handled::consumed_if(started);
                }
            }
        }

        if key.is(&self.config.keymap.toggle_edit) && self.config.dev_mode {
            if self.mode.is_editing() {
                self.disable();
            } else {
                self.enable();
            }
            return Handled::consumed_if(true);
        }
        Handled::ignored()
    }

    // --- Rendering ---

    /// Decorations for the current frame.
    #[must_use]
    pub fn overlay(&self) -> Overlay {
        let hud = Hud {
            object_count: self.objects.len(),
            selected_count: self.selection.len(),
            camera_locked: self.camera_locked,
            dirty: self.dirty,
            can_undo: self.history.can_undo(),
            can_redo: self.history.can_redo(),
            numeric_prompt: self.mode.numeric_entry().map(NumericEntry::prompt),
        };
        build_overlay(&self.objects, &self.selection, hud)
    }

    /// Hand the overlay to `renderer`. Draws nothing outside edit mode.
    pub fn render(&self, renderer: &mut dyn OverlayRenderer) {
        if self.mode.is_editing() {
            renderer.draw(&self.overlay());
        }
    }
}
