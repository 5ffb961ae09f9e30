//! Capability adapters and the registry that resolves them by type.
//!
//! Host scene types implement [`SceneObject`]. For each editable type the
//! host registers a [`Support`] adapter describing how to read and write its
//! position, size and rotation, and which of those edits are allowed.
//!
//! Lookup walks an explicit supertype chain: every [`TypeKey`] may name the
//! key of its immediate supertype, and a type with no adapter of its own
//! borrows the nearest registered ancestor's. The adapter then reaches the
//! ancestor's data through [`SceneObject::base`], so a `Label` that embeds
//! an `Actor` is edited through the `Actor` adapter.

#[cfg(test)]
#[path = "support_test.rs"]
mod support_test;

use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::collections::HashMap;
use std::marker::PhantomData;
use std::rc::Rc;

use tracing::debug;

use crate::representation::Transform;

/// A scene object shared between the host and the editor.
pub type SharedObject = Rc<RefCell<dyn SceneObject>>;

/// Stable runtime type identifier with a link to the immediate supertype.
#[derive(Debug, Clone, Copy)]
pub struct TypeKey {
    id: TypeId,
    name: &'static str,
    parent: Option<fn() -> TypeKey>,
}

impl TypeKey {
    /// Key for a type with no editable supertype.
    #[must_use]
    pub fn root<T: 'static>() -> Self {
        Self { id: TypeId::of::<T>(), name: std::any::type_name::<T>(), parent: None }
    }

    /// Key for a type whose immediate supertype is described by `parent`.
    #[must_use]
    pub fn child<T: 'static>(parent: fn() -> TypeKey) -> Self {
        Self { id: TypeId::of::<T>(), name: std::any::type_name::<T>(), parent: Some(parent) }
    }

    #[must_use]
    pub fn id(&self) -> TypeId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Key of the immediate supertype, if any.
    #[must_use]
    pub fn parent(&self) -> Option<TypeKey> {
        self.parent.map(|f| f())
    }
}

impl PartialEq for TypeKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeKey {}

/// An object the editor can be told about.
///
/// `base` / `base_mut` expose the embedded supertype value and must agree
/// with the chain described by [`TypeKey::parent`].
pub trait SceneObject: Any {
    fn type_key(&self) -> TypeKey;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn base(&self) -> Option<&dyn SceneObject> {
        None
    }

    fn base_mut(&mut self) -> Option<&mut dyn SceneObject> {
        None
    }
}

/// Find the `T` value inside `obj`, walking supertype views.
#[must_use]
pub fn view<T: 'static>(obj: &dyn SceneObject) -> Option<&T> {
    if let Some(found) = obj.as_any().downcast_ref::<T>() {
        return Some(found);
    }
    obj.base().and_then(|b| view::<T>(b))
}

/// Mutable counterpart of [`view`].
pub fn view_mut<T: 'static>(obj: &mut dyn SceneObject) -> Option<&mut T> {
    if obj.as_any().is::<T>() {
        return obj.as_any_mut().downcast_mut::<T>();
    }
    obj.base_mut().and_then(|b| view_mut::<T>(b))
}

/// A single editable attribute group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    Move,
    Scale,
    Rotate,
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Move => f.write_str("moving"),
            Self::Scale => f.write_str("scaling"),
            Self::Rotate => f.write_str("rotating"),
        }
    }
}

/// The edits an adapter allows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    pub moving: bool,
    pub scaling: bool,
    pub rotating: bool,
}

impl Capabilities {
    #[must_use]
    pub fn supports(&self, capability: Capability) -> bool {
        match capability {
            Capability::Move => self.moving,
            Capability::Scale => self.scaling,
            Capability::Rotate => self.rotating,
        }
    }
}

/// Describes how to read and write the transform of one scene type.
///
/// Adapters are stateless; one instance serves every object of the type.
/// Rotation is in degrees. Types that cannot rotate keep the defaults.
pub trait Support<T>: 'static {
    fn x(&self, obj: &T) -> f64;

    fn y(&self, obj: &T) -> f64;

    fn set_position(&self, obj: &mut T, x: f64, y: f64);

    fn width(&self, obj: &T) -> f64;

    fn height(&self, obj: &T) -> f64;

    fn set_size(&self, obj: &mut T, width: f64, height: f64);

    fn rotation(&self, _obj: &T) -> f64 {
        0.0
    }

    fn set_rotation(&self, _obj: &mut T, _degrees: f64) {}

    fn can_move(&self) -> bool {
        true
    }

    fn can_scale(&self) -> bool {
        true
    }

    fn can_rotate(&self) -> bool {
        false
    }
}

/// Object-safe form of a [`Support`], operating on `dyn SceneObject`.
///
/// The `write_*` methods return `false` when `obj` does not contain the
/// adapter's type.
pub trait ErasedSupport {
    /// Name of the type the adapter was registered for.
    fn type_name(&self) -> &'static str;

    fn capabilities(&self) -> Capabilities;

    fn read(&self, obj: &dyn SceneObject) -> Option<Transform>;

    fn write_position(&self, obj: &mut dyn SceneObject, x: f64, y: f64) -> bool;

    fn write_size(&self, obj: &mut dyn SceneObject, width: f64, height: f64) -> bool;

    fn write_rotation(&self, obj: &mut dyn SceneObject, degrees: f64) -> bool;
}

impl std::fmt::Debug for dyn ErasedSupport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Support")
            .field("type", &self.type_name())
            .field("capabilities", &self.capabilities())
            .finish()
    }
}

struct Adapter<T, S> {
    support: S,
    _type: PhantomData<fn() -> T>,
}

impl<T: 'static, S: Support<T>> ErasedSupport for Adapter<T, S> {
    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities {
            moving: self.support.can_move(),
            scaling: self.support.can_scale(),
            rotating: self.support.can_rotate(),
        }
    }

    fn read(&self, obj: &dyn SceneObject) -> Option<Transform> {
        let target = view::<T>(obj)?;
        Some(Transform {
            x: self.support.x(target),
            y: self.support.y(target),
            width: self.support.width(target),
            height: self.support.height(target),
            rotation: self.support.rotation(target),
        })
    }

    fn write_position(&self, obj: &mut dyn SceneObject, x: f64, y: f64) -> bool {
        let Some(target) = view_mut::<T>(obj) else {
            return false;
        };
        self.support.set_position(target, x, y);
        true
    }

    fn write_size(&self, obj: &mut dyn SceneObject, width: f64, height: f64) -> bool {
        let Some(target) = view_mut::<T>(obj) else {
            return false;
        };
        self.support.set_size(target, width, height);
        true
    }

    fn write_rotation(&self, obj: &mut dyn SceneObject, degrees: f64) -> bool {
        let Some(target) = view_mut::<T>(obj) else {
            return false;
        };
        self.support.set_rotation(target, degrees);
        true
    }
}

/// Maps scene types to their adapters.
#[derive(Default)]
pub struct SupportRegistry {
    supports: HashMap<TypeId, Rc<dyn ErasedSupport>>,
}

impl SupportRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `support` for `T`. A later registration for the same type replaces it.
    pub fn register<T: SceneObject, S: Support<T>>(&mut self, support: S) -> &mut Self {
        let adapter: Rc<dyn ErasedSupport> = Rc::new(Adapter::<T, S> { support, _type: PhantomData });
        if self.supports.insert(TypeId::of::<T>(), adapter).is_some() {
            debug!(type_name = std::any::type_name::<T>(), "support replaced");
        }
        self
    }

    /// Adapter for `key` or its nearest registered supertype.
    #[must_use]
    pub fn resolve(&self, key: TypeKey) -> Option<Rc<dyn ErasedSupport>> {
        let mut current = Some(key);
        while let Some(k) = current {
            if let Some(support) = self.supports.get(&k.id()) {
                return Some(Rc::clone(support));
            }
            current = k.parent();
        }
        None
    }

    /// Adapter for the runtime type of `obj`.
    #[must_use]
    pub fn resolve_for(&self, obj: &dyn SceneObject) -> Option<Rc<dyn ErasedSupport>> {
        self.resolve(obj.type_key())
    }

    #[must_use]
    pub fn is_supported(&self, obj: &dyn SceneObject) -> bool {
        self.resolve_for(obj).is_some()
    }

    /// Number of directly registered types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.supports.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.supports.is_empty()
    }
}
