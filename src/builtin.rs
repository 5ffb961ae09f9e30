//! Ready-made scene types and their adapters.
//!
//! Hosts with their own object model register their own [`Support`]s;
//! these cover the common cases and are what
//! [`Editor::with_builtin_supports`](crate::editor::Editor::with_builtin_supports) installs.

#[cfg(test)]
#[path = "builtin_test.rs"]
mod builtin_test;

use std::any::Any;

use crate::support::{SceneObject, Support, SupportRegistry, TypeKey};

/// A textured quad.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sprite {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Degrees, counter-clockwise around the centre.
    pub rotation: f64,
}

impl Sprite {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height, rotation: 0.0 }
    }
}

impl SceneObject for Sprite {
    fn type_key(&self) -> TypeKey {
        TypeKey::root::<Self>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// A UI widget with bounds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Actor {
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rotation: f64,
    pub visible: bool,
}

impl Actor {
    #[must_use]
    pub fn new(name: impl Into<String>, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { name: name.into(), x, y, width, height, rotation: 0.0, visible: true }
    }
}

impl SceneObject for Actor {
    fn type_key(&self) -> TypeKey {
        TypeKey::root::<Self>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// A text widget. Extends [`Actor`] and has no adapter of its own.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Label {
    pub actor: Actor,
    pub text: String,
}

impl Label {
    #[must_use]
    pub fn new(text: impl Into<String>, x: f64, y: f64, width: f64, height: f64) -> Self {
        let text = text.into();
        Self { actor: Actor::new(text.clone(), x, y, width, height), text }
    }
}

impl SceneObject for Label {
    fn type_key(&self) -> TypeKey {
        TypeKey::child::<Self>(TypeKey::root::<Actor>)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn base(&self) -> Option<&dyn SceneObject> {
        Some(&self.actor)
    }

    fn base_mut(&mut self) -> Option<&mut dyn SceneObject> {
        Some(&mut self.actor)
    }
}

/// Adapter for [`Sprite`]. Supports every edit.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpriteSupport;

impl Support<Sprite> for SpriteSupport {
    fn x(&self, obj: &Sprite) -> f64 {
        obj.x
    }

    fn y(&self, obj: &Sprite) -> f64 {
        obj.y
    }

    fn set_position(&self, obj: &mut Sprite, x: f64, y: f64) {
        obj.x = x;
        obj.y = y;
    }

    fn width(&self, obj: &Sprite) -> f64 {
        obj.width
    }

    fn height(&self, obj: &Sprite) -> f64 {
        obj.height
    }

    fn set_size(&self, obj: &mut Sprite, width: f64, height: f64) {
        obj.width = width;
        obj.height = height;
    }

    fn rotation(&self, obj: &Sprite) -> f64 {
        obj.rotation
    }

    fn set_rotation(&self, obj: &mut Sprite, degrees: f64) {
        obj.rotation = degrees;
    }

    fn can_rotate(&self) -> bool {
        true
    }
}

/// Adapter for [`Actor`] and anything that extends it.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActorSupport;

impl Support<Actor> for ActorSupport {
    fn x(&self, obj: &Actor) -> f64 {
        obj.x
    }

    fn y(&self, obj: &Actor) -> f64 {
        obj.y
    }

    fn set_position(&self, obj: &mut Actor, x: f64, y: f64) {
        obj.x = x;
        obj.y = y;
    }

    fn width(&self, obj: &Actor) -> f64 {
        obj.width
    }

    fn height(&self, obj: &Actor) -> f64 {
        obj.height
    }

    fn set_size(&self, obj: &mut Actor, width: f64, height: f64) {
        obj.width = width;
        obj.height = height;
    }

    fn rotation(&self, obj: &Actor) -> f64 {
        obj.rotation
    }

    fn set_rotation(&self, obj: &mut Actor, degrees: f64) {
        obj.rotation = degrees;
    }

    fn can_rotate(&self) -> bool {
        true
    }
}

/// Register [`SpriteSupport`] and [`ActorSupport`].
pub fn register_builtin(registry: &mut SupportRegistry) {
    registry.register::<Sprite, _>(SpriteSupport).register::<Actor, _>(ActorSupport);
}
