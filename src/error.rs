//! Error taxonomy for the editor.
//!
//! None of these are fatal. Input handlers log them and carry on; the
//! explicit API surfaces them as `Result`s for hosts that want to react.

use crate::persist::PersistError;
use crate::support::Capability;

/// Which undo/redo stack an operation found empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackKind {
    Undo,
    Redo,
}

impl std::fmt::Display for StackKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Undo => f.write_str("undo"),
            Self::Redo => f.write_str("redo"),
        }
    }
}

/// Errors produced by editor operations.
#[derive(Debug, thiserror::Error)]
pub enum EditorError {
    /// No adapter is registered for the object's type or any of its supertypes.
    #[error("no support registered for type {type_name}")]
    UnsupportedType { type_name: &'static str },

    /// At least one selected object lacks the capability an operation needs.
    #[error("some of the selected objects do not support {0}")]
    CapabilityRefused(Capability),

    /// The operation needs edit mode to be on.
    #[error("edit mode is off")]
    NotEditing,

    /// The operation needs at least one selected object.
    #[error("nothing is selected")]
    NothingSelected,

    /// Undo or redo was requested with nothing on the respective stack.
    #[error("nothing to {0}")]
    EmptyStack(StackKind),

    /// The scene store failed to load or save.
    #[error("scene persistence failed: {0}")]
    Persistence(#[from] PersistError),
}
