#![allow(clippy::float_cmp)]

use super::*;

fn feed(entry: &mut NumericEntry, keys: &[&str]) -> Vec<EntryKey> {
    keys.iter().map(|k| entry.key_down(&Key::new(*k))).collect()
}

// =============================================================
// Editing the buffer
// =============================================================

#[test]
fn digits_build_value() {
    let mut entry = NumericEntry::new(NumericField::X);
    feed(&mut entry, &["1", "2", ".", "5"]);
    assert_eq!(entry.buffer(), "12.5");
    assert_eq!(entry.value(), Some(12.5));
    assert_eq!(entry.prompt(), "x: 12.5");
}

#[test]
fn minus_only_leads() {
    let mut entry = NumericEntry::new(NumericField::Y);
    let results = feed(&mut entry, &["-", "3", "-"]);
    assert_eq!(results, vec![EntryKey::Edited, EntryKey::Edited, EntryKey::Ignored]);
    assert_eq!(entry.value(), Some(-3.0));
}

#[test]
fn second_decimal_point_is_ignored() {
    let mut entry = NumericEntry::new(NumericField::Width);
    feed(&mut entry, &["1", ".", "2", "."]);
    assert_eq!(entry.buffer(), "1.2");
}

#[test]
fn backspace_removes_last_char() {
    let mut entry = NumericEntry::new(NumericField::Height);
    feed(&mut entry, &["4", "2"]);
    assert_eq!(entry.key_down(&Key::new("Backspace")), EntryKey::Edited);
    assert_eq!(entry.buffer(), "4");
    feed(&mut entry, &["Backspace"]);
    assert_eq!(entry.key_down(&Key::new("Backspace")), EntryKey::Ignored);
}

#[test]
fn letters_and_named_keys_are_ignored() {
    let mut entry = NumericEntry::new(NumericField::Rotation);
    assert_eq!(feed(&mut entry, &["a", "F5", "Tab"]), vec![EntryKey::Ignored; 3]);
    assert!(entry.buffer().is_empty());
}

// =============================================================
// Commit and cancel
// =============================================================

#[test]
fn enter_and_escape() {
    let mut entry = NumericEntry::new(NumericField::X);
    assert_eq!(entry.key_down(&Key::new("Enter")), EntryKey::Commit);
    assert_eq!(entry.key_down(&Key::new("escape")), EntryKey::Cancel);
}

#[test]
fn incomplete_input_has_no_value() {
    let mut entry = NumericEntry::new(NumericField::X);
    assert_eq!(entry.value(), None);
    feed(&mut entry, &["-"]);
    assert_eq!(entry.value(), None);
    feed(&mut entry, &["."]);
    assert_eq!(entry.value(), None);
}
