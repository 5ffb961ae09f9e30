//! Keyboard numeric entry.
//!
//! While active, keys build up a number for one attribute of the selection.
//! The editor commits the parsed value on `Enter` (or when a pointer gesture
//! interrupts) and drops it on `Escape` or when edit mode is left.

#[cfg(test)]
#[path = "numeric_test.rs"]
mod numeric_test;

use crate::input::{Key, NumericField};

/// What a key did to an active entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKey {
    /// The buffer changed.
    Edited,
    /// Apply the value.
    Commit,
    /// Drop the value.
    Cancel,
    /// Key has no meaning here.
    Ignored,
}

/// A value being typed for one attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumericEntry {
    field: NumericField,
    buffer: String,
}

impl NumericEntry {
    #[must_use]
    pub fn new(field: NumericField) -> Self {
        Self { field, buffer: String::new() }
    }

    #[must_use]
    pub fn field(&self) -> NumericField {
        self.field
    }

    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Feed one key into the entry.
    pub fn key_down(&mut self, key: &Key) -> EntryKey {
        if key.is("Enter") {
            return EntryKey::Commit;
        }
        if key.is("Escape") {
            return EntryKey::Cancel;
        }
        if key.is("Backspace") {
            return if self.buffer.pop().is_some() { EntryKey::Edited } else { EntryKey::Ignored };
        }

        let mut chars = key.as_str().chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            return EntryKey::Ignored;
        };
        let accepted = match c {
            '0'..='9' => true,
            '.' => !self.buffer.contains('.'),
            '-' => self.buffer.is_empty(),
            _ => false,
        };
        if accepted {
            self.buffer.push(c);
            EntryKey::Edited
        } else {
            EntryKey::Ignored
        }
    }

    /// Parsed value, if the buffer holds a finite number.
    #[must_use]
    pub fn value(&self) -> Option<f64> {
        match self.buffer.parse::<f64>() {
            Ok(v) if v.is_finite() => Some(v),
            _ => None,
        }
    }

    /// Text for the HUD, e.g. `"width: 12.5"`.
    #[must_use]
    pub fn prompt(&self) -> String {
        format!("{}: {}", self.field.label(), self.buffer)
    }
}
