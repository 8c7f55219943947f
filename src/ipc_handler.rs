//! IPC message handler for the WebView bridge.
//!
//! Kept free of any windowing types so it can be unit-tested. The WebView
//! posts JSON messages `{"cmd": ..., ...}`; each is applied to the [`App`]
//! and answered with scripts to evaluate plus, at most, one async task the
//! caller must run. Task results come back through [`complete_fetch`] and
//! [`complete_relay`].

use serde::Deserialize;
use serde_json::json;

use crate::app::{App, FetchTicket};
use crate::types::contact::{ContactNotice, ContactSubmission};
use crate::types::errors::{FetchError, RelayError};
use crate::types::repository::Repository;
use crate::types::route::Route;
use crate::types::theme::ThemeMode;

/// Messages sent by the page script.
#[derive(Debug, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
enum IpcMessage {
    /// Page loaded; `path` is the location it was loaded at.
    UiReady {
        #[serde(default)]
        path: Option<String>,
    },
    Navigate {
        path: String,
    },
    ToggleTheme,
    SubmitContact(ContactSubmission),
}

/// Outbound work the UI loop must start.
#[derive(Debug, Clone, PartialEq)]
pub enum Task {
    FetchProjects(FetchTicket),
    SendContact(ContactSubmission),
}

/// What the UI loop must do in response to one message.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IpcResponse {
    pub scripts: Vec<String>,
    pub task: Option<Task>,
}

/// Applies one IPC message. Malformed messages are rejected with a description.
pub fn handle_message(app: &mut App, message: &str) -> Result<IpcResponse, String> {
    let msg: IpcMessage =
        serde_json::from_str(message).map_err(|e| format!("invalid ipc message: {}", e))?;

    let response = match msg {
        IpcMessage::UiReady { path } => {
            let nav = app.navigate(path.as_deref().unwrap_or("/"));
            IpcResponse {
                scripts: vec![theme_script(app.theme()), render_script(app)],
                task: nav.fetch.map(Task::FetchProjects),
            }
        }
        IpcMessage::Navigate { path } => {
            let nav = app.navigate(&path);
            IpcResponse {
                scripts: vec![render_script(app)],
                task: nav.fetch.map(Task::FetchProjects),
            }
        }
        IpcMessage::ToggleTheme => {
            let mode = app.toggle_theme();
            IpcResponse {
                scripts: vec![theme_script(mode)],
                task: None,
            }
        }
        IpcMessage::SubmitContact(submission) => {
            let submission = app.begin_contact_submission(submission);
            IpcResponse {
                scripts: Vec::new(),
                task: Some(Task::SendContact(submission)),
            }
        }
    };
    Ok(response)
}

/// Applies a finished fetch. Returns a render script only when the result was
/// accepted and the projects view is still on screen.
pub fn complete_fetch(
    app: &mut App,
    ticket: FetchTicket,
    result: Result<Vec<Repository>, FetchError>,
) -> Option<String> {
    if app.complete_projects_fetch(ticket, result) && app.route() == Route::Projects {
        Some(render_script(app))
    } else {
        None
    }
}

/// Applies a finished relay call and returns the notification script.
pub fn complete_relay(app: &mut App, result: Result<(), RelayError>) -> String {
    let notice = app.complete_contact_submission(result);
    contact_result_script(notice)
}

// ─── Script builders ───

/// Replaces the active view and syncs the nav bar and history.
pub fn render_script(app: &App) -> String {
    let payload = json!({
        "route": app.route().path(),
        "html": app.render_view(),
    });
    format!("if(window.__pf_render)__pf_render({})", payload)
}

pub fn theme_script(mode: ThemeMode) -> String {
    let payload = json!({
        "body": mode.body_class(),
        "app": mode.app_class(),
        "icon": mode.toggle_icon(),
    });
    format!("if(window.__pf_applyTheme)__pf_applyTheme({})", payload)
}

/// Blocking alert; the form is reset only after a successful send.
pub fn contact_result_script(notice: ContactNotice) -> String {
    let payload = json!({
        "ok": notice == ContactNotice::Sent,
        "text": notice.message(),
        "reset": notice.clears_form(),
    });
    format!("if(window.__pf_contactResult)__pf_contactResult({})", payload)
}
