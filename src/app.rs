//! App Core for Portfolio.
//!
//! The single owner of UI state: theme, active route, the projects view
//! lifecycle and the contact form draft. Views receive read-only borrows of
//! this state; the only writers are the operations below.

use tracing::{info, warn};

use crate::config::SiteConfig;
use crate::services::github_projects::select_showcase;
use crate::services::theme_engine::{ThemeEngine, ThemeEngineTrait};
use crate::types::contact::{ContactNotice, ContactSubmission};
use crate::types::errors::{FetchError, RelayError};
use crate::types::repository::{Repository, RepositoryListState};
use crate::types::route::Route;
use crate::types::theme::ThemeMode;
use crate::views;

/// Identifies one projects fetch. Completions carrying an older ticket are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

impl FetchTicket {
    pub fn sequence(self) -> u64 {
        self.0
    }
}

/// Result of a navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigation {
    pub route: Route,
    /// Set when the projects view was activated; the caller must start this fetch.
    pub fetch: Option<FetchTicket>,
}

/// Central application struct (the navigation shell's state).
pub struct App {
    config: SiteConfig,
    theme_engine: ThemeEngine,
    route: Route,
    projects: RepositoryListState,
    projects_seq: u64,
    contact_draft: ContactSubmission,
}

impl App {
    pub fn new(config: SiteConfig) -> Self {
        Self {
            config,
            theme_engine: ThemeEngine::new(ThemeMode::Dark),
            route: Route::Home,
            projects: RepositoryListState::Idle,
            projects_seq: 0,
            contact_draft: ContactSubmission::default(),
        }
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    // ─── Theme ───

    pub fn theme(&self) -> ThemeMode {
        self.theme_engine.get_theme()
    }

    pub fn toggle_theme(&mut self) -> ThemeMode {
        let mode = self.theme_engine.toggle();
        info!(theme = ?mode, "theme toggled");
        mode
    }

    // ─── Routing ───

    pub fn route(&self) -> Route {
        self.route
    }

    /// Activates the view for `path`. Unknown paths fall back to Home.
    ///
    /// Leaving the projects view discards its state and invalidates any
    /// in-flight fetch. Entering it always starts a fresh fetch.
    pub fn navigate(&mut self, path: &str) -> Navigation {
        let route = Route::from_path(path).unwrap_or_else(|| {
            warn!(path, "unknown route, showing home");
            Route::Home
        });

        if self.route == Route::Projects && route != Route::Projects {
            self.projects_seq += 1;
            self.projects = RepositoryListState::Idle;
        }
        self.route = route;
        info!(path = route.path(), "navigated");

        let fetch = (route == Route::Projects).then(|| self.begin_projects_fetch());
        Navigation { route, fetch }
    }

    // ─── Projects ───

    pub fn projects(&self) -> &RepositoryListState {
        &self.projects
    }

    fn begin_projects_fetch(&mut self) -> FetchTicket {
        self.projects_seq += 1;
        self.projects = RepositoryListState::Loading;
        FetchTicket(self.projects_seq)
    }

    /// Applies a fetch result. Returns `false` when the ticket is stale and
    /// the result was discarded.
    pub fn complete_projects_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<Repository>, FetchError>,
    ) -> bool {
        if ticket.0 != self.projects_seq || !self.projects.is_loading() {
            warn!(
                ticket = ticket.0,
                current = self.projects_seq,
                "discarding superseded projects response"
            );
            return false;
        }

        self.projects = match result {
            Ok(repos) => {
                let shown = select_showcase(repos);
                info!(count = shown.len(), "projects loaded");
                RepositoryListState::Loaded(shown)
            }
            Err(e) => RepositoryListState::Error(e.user_message().to_string()),
        };
        true
    }

    // ─── Contact ───

    pub fn contact_draft(&self) -> &ContactSubmission {
        &self.contact_draft
    }

    /// Records the submitted values as the form draft and returns the copy to relay.
    pub fn begin_contact_submission(&mut self, submission: ContactSubmission) -> ContactSubmission {
        info!("contact form submitted");
        self.contact_draft = submission.clone();
        submission
    }

    /// Clears the draft on success; leaves it untouched on failure.
    pub fn complete_contact_submission(&mut self, result: Result<(), RelayError>) -> ContactNotice {
        match result {
            Ok(()) => {
                self.contact_draft = ContactSubmission::default();
                ContactNotice::Sent
            }
            Err(e) => {
                warn!(error = %e, "contact message not delivered");
                ContactNotice::Failed
            }
        }
    }

    // ─── Rendering ───

    /// HTML of the active view.
    pub fn render_view(&self) -> String {
        views::render_view(self.route, &self.projects, &self.contact_draft)
    }

    /// Full document: shell around the active view.
    pub fn render_document(&self) -> String {
        views::shell::render_document(&self.theme_engine, self.route, &self.render_view())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(SiteConfig::default())
    }
}
