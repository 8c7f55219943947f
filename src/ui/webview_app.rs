//! WebView-based portfolio window using `wry` + `tao`.
//!
//! Architecture:
//! - Every path under `portfolio://localhost/` serves the same document; the
//!   page script reports its path with `ui_ready` and the view is rendered
//!   client-side from there.
//! - IPC from JS → Rust via `window.ipc.postMessage()`, dispatched by
//!   [`crate::ipc_handler`].
//! - The two network calls run on a tokio runtime and report back to the event
//!   loop as [`UserEvent`]s, which are applied on the UI thread.
//! - External links open in the system browser.

use std::borrow::Cow;
use std::sync::{Arc, Mutex, MutexGuard};

use tao::event::{Event, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoop, EventLoopBuilder, EventLoopProxy};
use tao::window::WindowBuilder;
use tracing::{debug, error, info, warn};
use wry::WebViewBuilder;

use crate::app::{App, FetchTicket};
use crate::config::SiteConfig;
use crate::ipc_handler::{self, Task};
use crate::services::email_relay::{EmailJsRelay, EmailRelay};
use crate::services::github_projects::{GitHubProjects, RepositorySource};
use crate::telemetry;
use crate::types::errors::{AppError, FetchError, RelayError};
use crate::types::repository::Repository;

const ORIGIN: &str = "portfolio://localhost/";

#[derive(Debug)]
enum UserEvent {
    EvalScript(String),
    ProjectsFetched {
        ticket: FetchTicket,
        result: Result<Vec<Repository>, FetchError>,
    },
    ContactRelayed(Result<(), RelayError>),
}

/// Shared handles needed to start background tasks.
#[derive(Clone)]
struct Workers {
    runtime: tokio::runtime::Handle,
    projects: Arc<dyn RepositorySource>,
    relay: Arc<dyn EmailRelay>,
    proxy: EventLoopProxy<UserEvent>,
}

impl Workers {
    fn spawn(&self, task: Task) {
        let proxy = self.proxy.clone();
        match task {
            Task::FetchProjects(ticket) => {
                let source = self.projects.clone();
                self.runtime.spawn(async move {
                    let result = source.list_repositories().await;
                    let _ = proxy.send_event(UserEvent::ProjectsFetched { ticket, result });
                });
            }
            Task::SendContact(submission) => {
                let relay = self.relay.clone();
                self.runtime.spawn(async move {
                    let result = relay.send(&submission).await;
                    let _ = proxy.send_event(UserEvent::ContactRelayed(result));
                });
            }
        }
    }
}

fn is_internal(url: &str) -> bool {
    // WebView2 and Android expose custom protocols as http://<scheme>.localhost
    url.starts_with("portfolio://")
        || url.starts_with("http://portfolio.localhost")
        || url.starts_with("https://portfolio.localhost")
}

/// Locks the shared state. A poisoned lock is logged and yields `None`.
fn lock_app<'a>(state: &'a Mutex<App>, context: &str) -> Option<MutexGuard<'a, App>> {
    match state.lock() {
        Ok(app) => Some(app),
        Err(_) => {
            error!(context, "app state lock poisoned");
            None
        }
    }
}

fn open_external(url: &str) {
    info!(url, "opening in system browser");
    if let Err(e) = webbrowser::open(url) {
        warn!(url, error = %e, "failed to open system browser");
    }
}

// ─── Main entry point ───

pub fn run() -> Result<(), AppError> {
    let config = SiteConfig::load()?;
    telemetry::init(&config.log_level)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let projects: Arc<dyn RepositorySource> = Arc::new(GitHubProjects::new(&config.github)?);
    let relay: Arc<dyn EmailRelay> = Arc::new(EmailJsRelay::new(&config.relay)?);
    let state = Arc::new(Mutex::new(App::new(config)));

    let event_loop: EventLoop<UserEvent> = EventLoopBuilder::with_user_event().build();
    let workers = Workers {
        runtime: runtime.handle().clone(),
        projects,
        relay,
        proxy: event_loop.create_proxy(),
    };

    let window = WindowBuilder::new()
        .with_title("Portfolio")
        .with_inner_size(tao::dpi::LogicalSize::new(1200.0, 820.0))
        .build(&event_loop)
        .map_err(|e| AppError::Window(e.to_string()))?;

    let protocol_state = state.clone();
    let ipc_state = state.clone();
    let ipc_workers = workers.clone();

    let builder = WebViewBuilder::new()
        .with_custom_protocol("portfolio".into(), move |_wv_id, request| {
            debug!(path = request.uri().path(), "serving document");
            let html = lock_app(&protocol_state, "custom protocol")
                .map(|app| app.render_document())
                .unwrap_or_default();
            wry::http::Response::builder()
                .header("Content-Type", "text/html; charset=utf-8")
                .body(Cow::Owned(html.into_bytes()))
                .unwrap_or_else(|_| wry::http::Response::new(Cow::Borrowed(&[][..])))
        })
        .with_url(ORIGIN)
        .with_ipc_handler(move |msg: wry::http::Request<String>| {
            let body = msg.body().as_str();
            let preview: String = body.chars().take(200).collect();
            debug!(message = %preview, "ipc");
            let Some(mut app) = lock_app(&ipc_state, "ipc") else {
                return;
            };
            match ipc_handler::handle_message(&mut app, body) {
                Ok(response) => {
                    for script in response.scripts {
                        let _ = ipc_workers.proxy.send_event(UserEvent::EvalScript(script));
                    }
                    if let Some(task) = response.task {
                        ipc_workers.spawn(task);
                    }
                }
                Err(e) => warn!(error = %e, "rejected ipc message"),
            }
        })
        .with_navigation_handler(|url: String| {
            if is_internal(&url) {
                return true;
            }
            open_external(&url);
            false
        })
        .with_new_window_req_handler(|url, _features| {
            open_external(&url);
            wry::NewWindowResponse::Deny
        })
        .with_devtools(cfg!(debug_assertions));

    #[cfg(target_os = "linux")]
    let webview = {
        use tao::platform::unix::WindowExtUnix;
        use wry::WebViewBuilderExtUnix;
        let vbox = window
            .default_vbox()
            .ok_or_else(|| AppError::Window("GTK vbox unavailable".into()))?;
        builder
            .build_gtk(vbox)
            .map_err(|e| AppError::Window(e.to_string()))?
    };

    #[cfg(not(target_os = "linux"))]
    let webview = builder
        .build(&window)
        .map_err(|e| AppError::Window(e.to_string()))?;

    info!("portfolio window ready");

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;
        // The runtime must outlive every spawned task.
        let _ = &runtime;

        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                *control_flow = ControlFlow::Exit;
            }

            Event::UserEvent(user_event) => {
                let script = match user_event {
                    UserEvent::EvalScript(js) => Some(js),
                    UserEvent::ProjectsFetched { ticket, result } => {
                        lock_app(&state, "projects fetched").and_then(|mut app| {
                            ipc_handler::complete_fetch(&mut app, ticket, result)
                        })
                    }
                    UserEvent::ContactRelayed(result) => lock_app(&state, "contact relayed")
                        .map(|mut app| ipc_handler::complete_relay(&mut app, result)),
                };
                if let Some(js) = script {
                    if let Err(e) = webview.evaluate_script(&js) {
                        error!(error = %e, "failed to evaluate script");
                    }
                }
            }

            _ => {}
        }
    })
}
