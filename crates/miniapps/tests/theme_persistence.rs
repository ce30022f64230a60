//! End-to-end theme persistence: toggled in one session, restored in the
//! next, through the real file backend.

use miniapps::app::{AppModel, Msg};
use miniapps::theme::ThemeFlag;
use miniapps_core::event::{Event, KeyCode, KeyEvent, Modifiers};
use miniapps_runtime::{FileStorage, Model, StateStore};

fn ctrl_t() -> Msg {
    Msg::from(Event::Key(
        KeyEvent::new(KeyCode::Char('t')).with_modifiers(Modifiers::CTRL),
    ))
}

#[test]
fn theme_survives_a_restart() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("state.json");

    let store = StateStore::load(Box::new(FileStorage::new(path.clone())));
    let mut app = AppModel::new(store);
    assert_eq!(app.theme(), ThemeFlag::Light);
    app.update(ctrl_t());
    assert_eq!(app.theme(), ThemeFlag::Dark);

    // A fresh session over the same file starts dark.
    let store = StateStore::load(Box::new(FileStorage::new(path)));
    let app = AppModel::new(store);
    assert_eq!(app.theme(), ThemeFlag::Dark);
}

#[test]
fn missing_state_file_defaults_to_light() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = StateStore::load(Box::new(FileStorage::new(dir.path().join("nope.json"))));
    let app = AppModel::new(store);
    assert_eq!(app.theme(), ThemeFlag::Light);
}

#[test]
fn corrupt_state_file_degrades_to_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("state.json");
    std::fs::write(&path, "{not json").expect("write");

    let store = StateStore::load(Box::new(FileStorage::new(path.clone())));
    let mut app = AppModel::new(store);
    assert_eq!(app.theme(), ThemeFlag::Light);

    // The first write replaces the corrupt file with valid state.
    app.update(ctrl_t());
    let raw = std::fs::read_to_string(&path).expect("read");
    assert!(raw.contains("dark"));
}
