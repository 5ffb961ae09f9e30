//! Headless demo: loads the scene file, nudges one object with a scripted
//! drag, and saves the result.
//!
//! `RUST_LOG=scene_editor=debug` shows every editor decision.

use std::cell::RefCell;
use std::process::ExitCode;
use std::rc::Rc;

use scene_editor::Editor;
use scene_editor::builtin::{Label, Sprite};
use scene_editor::camera::Point;
use scene_editor::config::EditorConfig;
use scene_editor::input::{Button, Modifiers};
use scene_editor::persist::JsonFileStore;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = EditorConfig::from_env();
    let store = JsonFileStore::new(config.scene_file.clone());
    let mut editor = Editor::new(config, Box::new(store)).with_builtin_supports();
    editor
        .add(Rc::new(RefCell::new(Sprite::new(0.0, 0.0, 320.0, 240.0))), "background")
        .add(Rc::new(RefCell::new(Sprite::new(40.0, 40.0, 32.0, 32.0))), "player")
        .add(Rc::new(RefCell::new(Label::new("score", 8.0, 8.0, 64.0, 16.0))), "score");

    if let Err(e) = editor.load() {
        error!(error = %e, "could not load scene");
        return ExitCode::FAILURE;
    }

    editor.enable();
    if !editor.is_editing() {
        info!("dev mode is off; nothing to edit");
        return ExitCode::SUCCESS;
    }

    let Some(grab) = editor.find("player").map(|o| o.bounds().center()) else {
        error!("player was not added");
        return ExitCode::FAILURE;
    };
    let drop = Point::new(grab.x + 8.0, grab.y);
    let none = Modifiers::default();
    editor.on_pointer_down(grab, Button::Primary, none);
    editor.on_pointer_move(drop, none);
    editor.on_pointer_up(drop, Button::Primary, none);

    let hud = editor.overlay().hud;
    info!(
        objects = hud.object_count,
        selected = hud.selected_count,
        dirty = hud.dirty,
        can_undo = hud.can_undo,
        "after scripted drag"
    );

    editor.disable();
    if editor.is_dirty() {
        error!(path = %editor.config().scene_file.display(), "scene was not saved");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
