//! Scene persistence: attribute snapshots keyed by identifier.
//!
//! DESIGN
//! ======
//! The editor hands a [`SceneSnapshot`] to a [`SceneStore`] on save and
//! applies one back on load. The store knows nothing about scene objects;
//! it only moves plain attribute values.
//!
//! ERROR HANDLING
//! ==============
//! Store failures surface as [`PersistError`]. The editor keeps its dirty
//! flag set when a save fails so the next save retries.

#[cfg(test)]
#[path = "persist_test.rs"]
mod persist_test;

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::representation::Transform;

/// Errors produced by scene stores.
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    /// Reading or writing the backing file failed.
    #[error("scene file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The stored scene could not be encoded or decoded.
    #[error("scene encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    /// The store refused the operation.
    #[error("scene store unavailable: {0}")]
    Unavailable(String),
}

/// Stored attributes of one object.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ObjectInfo {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub rotation: f64,
}

impl From<Transform> for ObjectInfo {
    fn from(t: Transform) -> Self {
        Self { x: t.x, y: t.y, width: t.width, height: t.height, rotation: t.rotation }
    }
}

impl From<ObjectInfo> for Transform {
    fn from(info: ObjectInfo) -> Self {
        Self { x: info.x, y: info.y, width: info.width, height: info.height, rotation: info.rotation }
    }
}

/// Attributes of every identified object in a scene.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SceneSnapshot {
    pub objects: BTreeMap<String, ObjectInfo>,
}

/// Sink and source for scene snapshots.
pub trait SceneStore {
    /// The last saved snapshot, or `None` if nothing was saved yet.
    ///
    /// # Errors
    ///
    /// Any failure reading or decoding the stored scene.
    fn load(&self) -> Result<Option<SceneSnapshot>, PersistError>;

    /// Replace the stored snapshot.
    ///
    /// # Errors
    ///
    /// Any failure encoding or writing the scene.
    fn save(&self, snapshot: &SceneSnapshot) -> Result<(), PersistError>;
}

/// Pretty-printed JSON file store.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SceneStore for JsonFileStore {
    fn load(&self) -> Result<Option<SceneSnapshot>, PersistError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %self.path.display(), "no saved scene yet");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };
        let snapshot: SceneSnapshot = serde_json::from_str(&text)?;
        debug!(path = %self.path.display(), objects = snapshot.objects.len(), "scene loaded");
        Ok(Some(snapshot))
    }

    /// Writes a sibling temp file and renames it over the target, so a
    /// failed write never truncates the previous scene.
    fn save(&self, snapshot: &SceneSnapshot) -> Result<(), PersistError> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        let json = serde_json::to_string_pretty(snapshot)?;
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        debug!(path = %self.path.display(), objects = snapshot.objects.len(), "scene saved");
        Ok(())
    }
}

/// In-memory store. Clones share the same contents.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    snapshot: Rc<RefCell<Option<SceneSnapshot>>>,
    failing: Rc<Cell<bool>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_snapshot(snapshot: SceneSnapshot) -> Self {
        let store = Self::default();
        *store.snapshot.borrow_mut() = Some(snapshot);
        store
    }

    /// Make every following load and save fail.
    pub fn set_failing(&self, failing: bool) {
        self.failing.set(failing);
    }

    /// Copy of the stored snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Option<SceneSnapshot> {
        self.snapshot.borrow().clone()
    }
}

impl SceneStore for MemoryStore {
    fn load(&self) -> Result<Option<SceneSnapshot>, PersistError> {
        if self.failing.get() {
            return Err(PersistError::Unavailable("memory store set to fail".into()));
        }
        Ok(self.snapshot.borrow().clone())
    }

    fn save(&self, snapshot: &SceneSnapshot) -> Result<(), PersistError> {
        if self.failing.get() {
            return Err(PersistError::Unavailable("memory store set to fail".into()));
        }
        *self.snapshot.borrow_mut() = Some(snapshot.clone());
        Ok(())
    }
}
