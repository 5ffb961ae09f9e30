//! In-application scene editor for 2D objects.
//!
//! The editor sits on top of a running host application. The host tells it
//! which scene objects exist, forwards raw pointer and keyboard events while
//! edit mode is on, and draws the [`render::Overlay`] it hands back. The
//! editor selects, moves, scales and rotates those objects, keeps an
//! undo/redo history of every gesture, and persists attribute snapshots
//! through a [`persist::SceneStore`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`editor`] | [`editor::Editor`]: object bookkeeping and the input state machine |
//! | [`support`] | Capability adapters and the registry that resolves them by type |
//! | [`builtin`] | Ready-made `Sprite` / `Actor` / `Label` types and adapters |
//! | [`representation`] | Per-object handles, hover state and drag transforms |
//! | [`action`] | Reversible edits and gesture batches |
//! | [`history`] | Undo/redo stacks |
//! | [`hit`] | Smallest-area hit-testing and the selection set |
//! | [`input`] | Input event types and edit-mode state |
//! | [`numeric`] | Keyboard numeric entry |
//! | [`camera`] | Geometry, the viewport contract and the default pan/zoom camera |
//! | [`render`] | Overlay description handed to the host renderer |
//! | [`persist`] | Scene snapshots and stores |
//! | [`config`] | Settings and key bindings |
//! | [`error`] | Error types |
//! | [`consts`] | Shared numeric constants (handle sizes, zoom limits, etc.) |

pub mod action;
pub mod builtin;
pub mod camera;
pub mod config;
pub mod consts;
pub mod editor;
pub mod error;
pub mod history;
pub mod hit;
pub mod input;
pub mod numeric;
pub mod persist;
pub mod render;
pub mod representation;
pub mod support;

pub use editor::Editor;
pub use error::EditorError;
