//! Projects grid fed by the repository listing.

use chrono::{DateTime, Local, Utc};

use crate::types::repository::{Repository, RepositoryListState};

use super::html::{escape, external_link};

pub const LANGUAGE_FALLBACK: &str = "Multiple technologies";
pub const DESCRIPTION_FALLBACK: &str =
    "A GitHub project from my portfolio. Check the repository for more details.";
pub const LOADING_TEXT: &str = "Loading projects...";

pub fn render(state: &RepositoryListState) -> String {
    let body = match state {
        // Idle only shows for the instant between activation and the fetch starting.
        RepositoryListState::Idle | RepositoryListState::Loading => {
            format!("<p class=\"status-text\">{}</p>", LOADING_TEXT)
        }
        RepositoryListState::Error(message) => {
            format!("<p class=\"status-text status-error\">{}</p>", escape(message))
        }
        RepositoryListState::Loaded(repos) => {
            let cards: String = repos
                .iter()
                .enumerate()
                .map(|(index, repo)| render_card(index, repo))
                .collect();
            format!("<div class=\"cards-grid\">{}</div>", cards)
        }
    };

    format!(
        "<section class=\"section enter-left\">\
<h2 class=\"section-title gradient-text\">Projects</h2>\
<p class=\"section-subtitle\">Latest repositories from my GitHub. New projects you see here are pulled automatically.</p>\
{}</section>",
        body
    )
}

/// One repository card. `index` picks the ribbon colour.
pub fn render_card(index: usize, repo: &Repository) -> String {
    let demo = repo
        .live_demo_url()
        .map(|url| external_link(url, "btn btn-secondary", "Live Demo"))
        .unwrap_or_default();

    format!(
        "<article class=\"card card-project\" data-repo-id=\"{id}\">\
<div class=\"card-ribbon ribbon-{ribbon}\"></div>\
<h3 class=\"card-title\">{name}</h3>\
<p class=\"card-tech\">{language}</p>\
<p class=\"card-desc\">{description}</p>\
<ul class=\"card-list\">\
<li>⭐ Stars: {stars}</li>\
<li>🍴 Forks: {forks}</li>\
<li>📅 Created: {created}</li>\
</ul>\
<div class=\"card-buttons\">{github}{demo}</div>\
</article>",
        id = repo.id,
        ribbon = index % 3,
        name = escape(&repo.name),
        language = escape(non_blank(repo.language.as_deref()).unwrap_or(LANGUAGE_FALLBACK)),
        description = escape(non_blank(repo.description.as_deref()).unwrap_or(DESCRIPTION_FALLBACK)),
        stars = repo.stars,
        forks = repo.forks,
        created = format_created(&repo.created_at),
        github = external_link(&repo.html_url, "btn btn-outline", "View on GitHub"),
        demo = demo,
    )
}

/// Short numeric date in the viewer's timezone, e.g. `3/1/2025`.
pub fn format_created(created_at: &DateTime<Utc>) -> String {
    created_at.with_timezone(&Local).format("%-m/%-d/%Y").to_string()
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}
