#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Registration
// =============================================================

#[test]
fn register_builtin_adds_sprite_and_actor() {
    let mut registry = SupportRegistry::new();
    register_builtin(&mut registry);
    assert_eq!(registry.len(), 2);
    assert!(registry.is_supported(&Sprite::default()));
    assert!(registry.is_supported(&Actor::default()));
}

#[test]
fn label_resolves_to_actor_support() {
    let mut registry = SupportRegistry::new();
    register_builtin(&mut registry);
    let label = Label::new("title", 1.0, 2.0, 30.0, 10.0);
    let support = registry.resolve_for(&label).unwrap();
    assert!(support.type_name().ends_with("Actor"));
}

// =============================================================
// Access through adapters
// =============================================================

#[test]
fn label_edits_reach_embedded_actor() {
    let mut registry = SupportRegistry::new();
    register_builtin(&mut registry);
    let mut label = Label::new("title", 1.0, 2.0, 30.0, 10.0);
    let support = registry.resolve_for(&label).unwrap();

    let t = support.read(&label).unwrap();
    assert_eq!((t.x, t.y, t.width, t.height), (1.0, 2.0, 30.0, 10.0));

    assert!(support.write_position(&mut label, 7.0, 8.0));
    assert!(support.write_rotation(&mut label, 15.0));
    assert_eq!((label.actor.x, label.actor.y), (7.0, 8.0));
    assert_eq!(label.actor.rotation, 15.0);
    assert_eq!(label.text, "title");
}

#[test]
fn sprite_supports_every_edit() {
    let mut registry = SupportRegistry::new();
    register_builtin(&mut registry);
    let caps = registry.resolve_for(&Sprite::default()).unwrap().capabilities();
    assert!(caps.moving && caps.scaling && caps.rotating);
}

#[test]
fn actor_new_is_visible() {
    let actor = Actor::new("hud", 0.0, 0.0, 1.0, 1.0);
    assert!(actor.visible);
    assert_eq!(actor.name, "hud");
}
