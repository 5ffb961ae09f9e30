//! Input model: modifier keys, buttons, keys, and the edit-mode state.
//!
//! The host translates its native events into these types. [`EditMode`] is
//! the editor's top-level state; pointer gestures inside `Editing` are
//! tracked by the editor itself.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::numeric::NumericEntry;
use crate::support::Capability;

/// Keyboard/mouse modifier keys held during an event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// Shift key is held.
    pub shift: bool,
    /// Ctrl key is held.
    pub ctrl: bool,
    /// Alt / Option key is held.
    pub alt: bool,
    /// Meta / Command key is held.
    pub meta: bool,
}

/// Which modifier a keymap binding refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModifierKey {
    Shift,
    Ctrl,
    Alt,
    Meta,
}

impl Modifiers {
    #[must_use]
    pub fn holds(&self, key: ModifierKey) -> bool {
        match key {
            ModifierKey::Shift => self.shift,
            ModifierKey::Ctrl => self.ctrl,
            ModifierKey::Alt => self.alt,
            ModifierKey::Meta => self.meta,
        }
    }
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button.
    Middle,
    /// Right mouse button.
    Secondary,
}

/// A keyboard key.
///
/// The inner string holds the key name as the host reports it (e.g. `"F11"`, `"z"`, `"Enter"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Key(pub String);

impl Key {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison against a binding name.
    #[must_use]
    pub fn is(&self, name: &str) -> bool {
        self.0.eq_ignore_ascii_case(name)
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Self(name.to_owned())
    }
}

/// Wheel / trackpad scroll delta.
#[derive(Debug, Clone, Copy, Default)]
pub struct WheelDelta {
    /// Horizontal scroll amount in pixels.
    pub dx: f64,
    /// Vertical scroll amount in pixels (positive = down).
    pub dy: f64,
}

/// Attribute bound to keyboard numeric entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericField {
    X,
    Y,
    Width,
    Height,
    Rotation,
}

impl NumericField {
    /// Capability every selected object needs for this field.
    #[must_use]
    pub fn capability(self) -> Capability {
        match self {
            Self::X | Self::Y => Capability::Move,
            Self::Width | Self::Height => Capability::Scale,
            Self::Rotation => Capability::Rotate,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Width => "width",
            Self::Height => "height",
            Self::Rotation => "rotation",
        }
    }
}

/// Top-level editor state.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum EditMode {
    /// Edit mode off; input passes through to the host.
    #[default]
    Idle,
    /// Edit mode on, pointer-driven editing.
    Editing,
    /// Edit mode on, typing a value for one attribute of the selection.
    NumericEntry(NumericEntry),
}

impl EditMode {
    #[must_use]
    pub fn is_editing(&self) -> bool {
        !matches!(self, Self::Idle)
    }

    #[must_use]
    pub fn numeric_entry(&self) -> Option<&NumericEntry> {
        match self {
            Self::NumericEntry(entry) => Some(entry),
            _ => None,
        }
    }
}

/// Outcome of an input handler.
///
/// `consumed` tells the host not to route the event elsewhere; `changed`
/// tells it the scene or view was modified and should be redrawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Handled {
    pub consumed: bool,
    pub changed: bool,
}

impl Handled {
    /// Event not for the editor.
    #[must_use]
    pub fn ignored() -> Self {
        Self::default()
    }

    /// Event consumed without a visible change.
    #[must_use]
    pub fn consumed() -> Self {
        Self { consumed: true, changed: false }
    }

    /// Event consumed; `changed` reports whether anything moved.
    #[must_use]
    pub fn consumed_if(changed: bool) -> Self {
        Self { consumed: true, changed }
    }
}
