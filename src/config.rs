//! Editor configuration and key bindings.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;
use std::str::FromStr;

use tracing::warn;

use crate::consts::{DEFAULT_HISTORY_LIMIT, HANDLE_SIZE, MIN_OBJECT_SIZE, ROTATE_HANDLE_OFFSET};
use crate::input::{Key, ModifierKey, Modifiers, NumericField};
use crate::representation::HandleConfig;

pub const DEFAULT_SCENE_FILE: &str = "scene.json";

/// Key bindings. Key names compare case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keymap {
    pub toggle_edit: String,
    pub lock_camera: String,
    pub reset_camera: String,
    /// Modifier that turns `save` / `undo` / `redo` into commands.
    pub special: ModifierKey,
    pub save: String,
    pub undo: String,
    pub redo: String,
    /// Modifier that makes a click clear the selection instead of selecting.
    pub no_select: ModifierKey,
    pub edit_x: String,
    pub edit_y: String,
    pub edit_width: String,
    pub edit_height: String,
    pub edit_rotation: String,
}

impl Default for Keymap {
    fn default() -> Self {
        Self {
            toggle_edit: "F11".into(),
            lock_camera: "F9".into(),
            reset_camera: "F10".into(),
            special: ModifierKey::Ctrl,
            save: "s".into(),
            undo: "z".into(),
            redo: "y".into(),
            no_select: ModifierKey::Shift,
            edit_x: "1".into(),
            edit_y: "2".into(),
            edit_width: "3".into(),
            edit_height: "4".into(),
            edit_rotation: "5".into(),
        }
    }
}

impl Keymap {
    #[must_use]
    pub fn special_held(&self, modifiers: Modifiers) -> bool {
        modifiers.holds(self.special)
    }

    #[must_use]
    pub fn no_select_held(&self, modifiers: Modifiers) -> bool {
        modifiers.holds(self.no_select)
    }

    /// Numeric-entry field bound to `key`, if any.
    #[must_use]
    pub fn numeric_field(&self, key: &Key) -> Option<NumericField> {
        [
            (&self.edit_x, NumericField::X),
            (&self.edit_y, NumericField::Y),
            (&self.edit_width, NumericField::Width),
            (&self.edit_height, NumericField::Height),
            (&self.edit_rotation, NumericField::Rotation),
        ]
        .into_iter()
        .find_map(|(binding, field)| key.is(binding).then_some(field))
    }
}

/// Editor settings.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorConfig {
    /// Whether edit mode may be entered at all.
    pub dev_mode: bool,
    /// Where [`JsonFileStore`](crate::persist::JsonFileStore) keeps the scene.
    pub scene_file: PathBuf,
    pub handles: HandleConfig,
    /// Maximum undo depth; 0 means unlimited.
    pub history_limit: usize,
    pub keymap: Keymap,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            dev_mode: true,
            scene_file: PathBuf::from(DEFAULT_SCENE_FILE),
            handles: HandleConfig::default(),
            history_limit: DEFAULT_HISTORY_LIMIT,
            keymap: Keymap::default(),
        }
    }
}

impl EditorConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `SCENE_EDITOR_DEV_MODE`: `true` (default) or `false`
    /// - `SCENE_EDITOR_SCENE_FILE`: default `scene.json`
    /// - `SCENE_EDITOR_HANDLE_SIZE`: default 8
    /// - `SCENE_EDITOR_ROTATE_OFFSET`: default 24
    /// - `SCENE_EDITOR_MIN_SIZE`: default 1
    /// - `SCENE_EDITOR_HISTORY_LIMIT`: default 100, 0 for unlimited
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| match std::env::var(key) {
            Ok(value) => Some(value),
            Err(_) => None,
        })
    }

    /// Build config from any key/value source. Unparsable values fall back to defaults.
    /// Handle and minimum sizes must be finite and positive. The rotate offset may be
    /// zero but not negative or non-finite.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let handles = HandleConfig {
            handle_size: parse_length_or(&lookup, "SCENE_EDITOR_HANDLE_SIZE", HANDLE_SIZE, false),
            rotate_offset: parse_length_or(&lookup, "SCENE_EDITOR_ROTATE_OFFSET", ROTATE_HANDLE_OFFSET, true),
            min_size: parse_length_or(&lookup, "SCENE_EDITOR_MIN_SIZE", MIN_OBJECT_SIZE, false),
        };
        Self {
            dev_mode: parse_or(&lookup, "SCENE_EDITOR_DEV_MODE", true),
            scene_file: lookup("SCENE_EDITOR_SCENE_FILE").map_or_else(|| PathBuf::from(DEFAULT_SCENE_FILE), PathBuf::from),
            handles,
            history_limit: parse_or(&lookup, "SCENE_EDITOR_HISTORY_LIMIT", DEFAULT_HISTORY_LIMIT),
            keymap: Keymap::default(),
        }
    }
}

fn parse_or<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
    let Some(raw) = lookup(key) else {
        return default;
    };
    match raw.trim().parse::<T>() {
        Ok(value) => value,
        Err(_) => {
            warn!(key, value = %raw, "ignoring unparsable config value");
            default
        }
    }
}

/// Parse a geometry length, falling back to `default` for NaN, infinities,
/// negatives, and zero unless `allow_zero` is set.
fn parse_length_or(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: f64, allow_zero: bool) -> f64 {
    let value = parse_or(lookup, key, default);
    let in_range = if allow_zero { value >= 0.0 } else { value > 0.0 };
    if value.is_finite() && in_range {
        value
    } else {
        warn!(key, value, "ignoring out-of-range config value");
        default
    }
}
