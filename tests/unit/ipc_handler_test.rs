//! Unit tests for the WebView IPC dispatcher.
//!
//! Exercises `handle_message`, `complete_fetch` and `complete_relay`
//! against a fresh `App`, without any window.

use portfolio::app::App;
use portfolio::ipc_handler::{complete_fetch, complete_relay, handle_message, Task};
use portfolio::types::contact::ContactSubmission;
use portfolio::types::errors::{FetchError, RelayError};
use portfolio::types::route::Route;
use portfolio::types::theme::ThemeMode;
use serde_json::json;

fn send(app: &mut App, msg: serde_json::Value) -> portfolio::ipc_handler::IpcResponse {
    handle_message(app, &msg.to_string()).unwrap()
}

#[test]
fn test_ui_ready_applies_theme_and_renders_path() {
    let mut app = App::default();
    let res = send(&mut app, json!({"cmd": "ui_ready", "path": "/skills"}));

    assert_eq!(app.route(), Route::Skills);
    assert_eq!(res.scripts.len(), 2);
    assert!(res.scripts[0].contains("__pf_applyTheme"));
    assert!(res.scripts[0].contains("dark-body"));
    assert!(res.scripts[1].contains("__pf_render"));
    assert!(res.scripts[1].contains("\"route\":\"/skills\""));
    assert!(res.task.is_none());
}

#[test]
fn test_ui_ready_without_path_shows_home() {
    let mut app = App::default();
    send(&mut app, json!({"cmd": "ui_ready"}));
    assert_eq!(app.route(), Route::Home);
}

#[test]
fn test_navigate_to_projects_requests_fetch() {
    let mut app = App::default();
    let res = send(&mut app, json!({"cmd": "navigate", "path": "/projects"}));

    assert!(matches!(res.task, Some(Task::FetchProjects(_))));
    assert!(res.scripts[0].contains("Loading projects..."));
}

#[test]
fn test_toggle_theme_returns_light_classes() {
    let mut app = App::default();
    let res = send(&mut app, json!({"cmd": "toggle_theme"}));

    assert_eq!(app.theme(), ThemeMode::Light);
    assert_eq!(res.scripts.len(), 1);
    assert!(res.scripts[0].contains("\"body\":\"light-body\""));
    assert!(res.scripts[0].contains("\"app\":\"app-light\""));
}

#[test]
fn test_submit_contact_requests_relay_with_fields() {
    let mut app = App::default();
    let res = send(
        &mut app,
        json!({
            "cmd": "submit_contact",
            "user_name": "Linus",
            "user_email": "linus@example.com",
            "message": "Hi"
        }),
    );

    let expected = ContactSubmission::new("Linus", "linus@example.com", "Hi");
    assert_eq!(res.task, Some(Task::SendContact(expected.clone())));
    assert_eq!(*app.contact_draft(), expected);
}

#[test]
fn test_malformed_messages_are_rejected() {
    let mut app = App::default();
    assert!(handle_message(&mut app, "not json").is_err());
    assert!(handle_message(&mut app, r#"{"cmd":"format_disk"}"#).is_err());
    assert!(handle_message(&mut app, r#"{"cmd":"navigate"}"#).is_err());
}

#[test]
fn test_complete_fetch_renders_when_still_on_projects() {
    let mut app = App::default();
    let res = send(&mut app, json!({"cmd": "navigate", "path": "/projects"}));
    let Some(Task::FetchProjects(ticket)) = res.task else {
        panic!("expected fetch task");
    };

    let script = complete_fetch(&mut app, ticket, Err(FetchError::Status { status: 403 }));
    let script = script.expect("render script");
    assert!(script.contains("Unable to load projects from GitHub right now."));
}

#[test]
fn test_complete_fetch_after_leaving_view_is_silent() {
    let mut app = App::default();
    let res = send(&mut app, json!({"cmd": "navigate", "path": "/projects"}));
    let Some(Task::FetchProjects(ticket)) = res.task else {
        panic!("expected fetch task");
    };
    send(&mut app, json!({"cmd": "navigate", "path": "/"}));

    assert!(complete_fetch(&mut app, ticket, Ok(Vec::new())).is_none());
}

#[test]
fn test_complete_relay_success_resets_form() {
    let mut app = App::default();
    send(
        &mut app,
        json!({"cmd": "submit_contact", "user_name": "a", "user_email": "a@b.c", "message": "m"}),
    );
    let script = complete_relay(&mut app, Ok(()));
    assert!(script.contains("__pf_contactResult"));
    assert!(script.contains("\"reset\":true"));
    assert!(script.contains("\"ok\":true"));
    assert!(app.contact_draft().is_empty());
}

#[test]
fn test_complete_relay_failure_keeps_form() {
    let mut app = App::default();
    send(
        &mut app,
        json!({"cmd": "submit_contact", "user_name": "a", "user_email": "a@b.c", "message": "m"}),
    );
    let script = complete_relay(&mut app, Err(RelayError::Transport("offline".into())));
    assert!(script.contains("\"reset\":false"));
    assert!(script.contains("Something went wrong. Please try again"));
    assert!(!app.contact_draft().is_empty());
}
