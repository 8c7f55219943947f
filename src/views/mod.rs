//! HTML rendering for the shell and every view.
//!
//! All functions are pure: they take read-only state and return markup.
//! Text coming from outside the crate is escaped with [`html::escape`].

pub mod certifications;
pub mod contact;
pub mod home;
pub mod html;
pub mod projects;
pub mod shell;
pub mod skills;

use crate::types::contact::ContactSubmission;
use crate::types::repository::RepositoryListState;
use crate::types::route::Route;

/// Renders the view selected by `route`.
pub fn render_view(
    route: Route,
    projects: &RepositoryListState,
    contact_draft: &ContactSubmission,
) -> String {
    match route {
        Route::Home => home::render(),
        Route::Projects => projects::render(projects),
        Route::Skills => skills::render(),
        Route::Certifications => certifications::render(),
        Route::Contact => contact::render(contact_draft),
    }
}
