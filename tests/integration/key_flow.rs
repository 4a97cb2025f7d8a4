//! Integration tests driving the application purely through key events,
//! the way a user would: typing into the form, navigating the list,
//! toggling, editing, deleting, and opening the detail overlay.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use taskdeck::app::{App, PanelFocus};

// ---------------------------------------------------------------------------
// Helper functions
// ---------------------------------------------------------------------------

fn key(app: &mut App, code: KeyCode) {
    app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_str(app: &mut App, s: &str) {
    for c in s.chars() {
        key(app, KeyCode::Char(c));
    }
}

/// Create a task through the form: type the title, move down, type the
/// description, press Enter.
fn create_task(app: &mut App, title: &str, description: &str) {
    type_str(app, title);
    key(app, KeyCode::Down);
    type_str(app, description);
    key(app, KeyCode::Enter);
}

/// Tab over to the task list panel.
fn focus_list(app: &mut App) {
    while app.focus != PanelFocus::TaskList {
        key(app, KeyCode::Tab);
    }
}

// --- creating ---

#[test]
fn form_flow_creates_a_task() {
    let mut app = App::new();
    create_task(&mut app, "Buy milk", "2 liters");

    assert_eq!(app.manager.tasks().len(), 1);
    let task = &app.manager.tasks()[0];
    assert_eq!(task.title, "Buy milk");
    assert_eq!(task.description, "2 liters");
    assert!(!task.completed);

    // Form resets for the next task.
    assert_eq!(app.manager.draft_title(), "");
    assert_eq!(app.focus, PanelFocus::TitleInput);
}

#[test]
fn whitespace_title_is_refused_and_form_keeps_input() {
    let mut app = App::new();
    create_task(&mut app, "   ", "2 liters");

    assert!(app.manager.tasks().is_empty());
    assert_eq!(app.manager.draft_title(), "   ");
    assert_eq!(app.manager.draft_description(), "2 liters");
}

#[test]
fn typed_whitespace_padding_is_trimmed_on_create() {
    let mut app = App::new();
    create_task(&mut app, "  Buy milk  ", "  2 liters  ");
    assert_eq!(app.manager.tasks()[0].title, "Buy milk");
    assert_eq!(app.manager.tasks()[0].description, "2 liters");
}

// --- list navigation and per-task actions ---

#[test]
fn navigation_and_toggle() {
    let mut app = App::new();
    create_task(&mut app, "A", "first");
    create_task(&mut app, "B", "second");
    create_task(&mut app, "C", "third");
    focus_list(&mut app);

    key(&mut app, KeyCode::Down);
    key(&mut app, KeyCode::Char('j'));
    assert_eq!(app.list_cursor, 2);
    // Cursor stops at the last row.
    key(&mut app, KeyCode::Down);
    assert_eq!(app.list_cursor, 2);

    key(&mut app, KeyCode::Char(' '));
    assert!(app.manager.tasks()[2].completed);
    assert!(!app.manager.tasks()[0].completed);

    key(&mut app, KeyCode::Char('k'));
    key(&mut app, KeyCode::Up);
    assert_eq!(app.list_cursor, 0);
}

#[test]
fn edit_through_the_form_saves_in_place() {
    let mut app = App::new();
    create_task(&mut app, "Buy milk", "2 liters");
    focus_list(&mut app);

    key(&mut app, KeyCode::Char('e'));
    assert_eq!(app.focus, PanelFocus::TitleInput);
    assert_eq!(app.manager.draft_title(), "Buy milk");

    // Append to the loaded title; the cursor starts at the end.
    type_str(&mut app, " today");
    key(&mut app, KeyCode::Enter);

    assert_eq!(app.manager.tasks().len(), 1);
    assert_eq!(app.manager.tasks()[0].title, "Buy milk today");
    assert!(!app.manager.is_editing());
}

#[test]
fn delete_from_the_list() {
    let mut app = App::new();
    create_task(&mut app, "A", "first");
    create_task(&mut app, "B", "second");
    focus_list(&mut app);

    key(&mut app, KeyCode::Char('d'));
    assert_eq!(app.manager.tasks().len(), 1);
    assert_eq!(app.manager.tasks()[0].title, "B");

    key(&mut app, KeyCode::Delete);
    assert!(app.manager.tasks().is_empty());

    // Deleting with nothing highlighted is a no-op.
    key(&mut app, KeyCode::Char('d'));
    assert!(app.manager.tasks().is_empty());
}

// --- detail overlay ---

#[test]
fn overlay_opens_shows_and_dismisses() {
    let mut app = App::new();
    create_task(&mut app, "Buy milk", "2 liters");
    focus_list(&mut app);

    key(&mut app, KeyCode::Enter);
    assert!(app.overlay_open());
    assert_eq!(app.manager.selected_task().unwrap().title, "Buy milk");

    // Keys other than the dismiss set are swallowed.
    key(&mut app, KeyCode::Char(' '));
    assert!(!app.manager.tasks()[0].completed);
    key(&mut app, KeyCode::Tab);
    assert_eq!(app.focus, PanelFocus::TaskList);

    key(&mut app, KeyCode::Enter);
    assert!(!app.overlay_open());

    // Re-open and close with q.
    key(&mut app, KeyCode::Enter);
    assert!(app.overlay_open());
    key(&mut app, KeyCode::Char('q'));
    assert!(!app.overlay_open());
}

// --- quitting ---

#[test]
fn esc_quits_when_idle() {
    let mut app = App::new();
    key(&mut app, KeyCode::Esc);
    assert!(app.should_quit);
}

#[test]
fn esc_first_cancels_an_edit() {
    let mut app = App::new();
    create_task(&mut app, "Buy milk", "2 liters");
    focus_list(&mut app);
    key(&mut app, KeyCode::Char('e'));

    key(&mut app, KeyCode::Esc);
    assert!(!app.should_quit);
    assert!(!app.manager.is_editing());
    assert_eq!(app.manager.draft_title(), "");
    assert_eq!(app.manager.tasks()[0].title, "Buy milk");
}

#[test]
fn ctrl_c_always_quits() {
    let mut app = App::new();
    app.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(app.should_quit);
}
