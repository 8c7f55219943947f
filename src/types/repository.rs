use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Maximum number of repositories shown in the projects grid.
pub const SHOWCASE_LIMIT: usize = 9;

/// The one message shown whenever the repository list cannot be loaded.
pub const PROJECTS_UNAVAILABLE: &str = "Unable to load projects from GitHub right now.";

/// A public repository as returned by the GitHub listing endpoint.
///
/// Field names on the wire follow the GitHub REST API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(rename = "stargazers_count", default)]
    pub stars: u32,
    #[serde(rename = "forks_count", default)]
    pub forks: u32,
    pub created_at: DateTime<Utc>,
    /// GitHub reports an unset homepage as either `null` or `""`.
    #[serde(default, deserialize_with = "blank_as_none")]
    pub homepage: Option<String>,
    pub html_url: String,
    #[serde(rename = "fork", default)]
    pub is_fork: bool,
    #[serde(rename = "archived", default)]
    pub is_archived: bool,
}

impl Repository {
    /// Forks and archived repositories never appear in the grid.
    pub fn is_showcased(&self) -> bool {
        !self.is_fork && !self.is_archived
    }

    pub fn live_demo_url(&self) -> Option<&str> {
        self.homepage.as_deref()
    }
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

/// Lifecycle of the projects view.
///
/// `Idle` holds while the view is not active. Activation always enters
/// `Loading`, which resolves to exactly one of `Error` or `Loaded`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RepositoryListState {
    #[default]
    Idle,
    Loading,
    Error(String),
    Loaded(Vec<Repository>),
}

impl RepositoryListState {
    pub fn is_loading(&self) -> bool {
        matches!(self, RepositoryListState::Loading)
    }

    /// Repositories currently displayed; empty unless loaded.
    pub fn repositories(&self) -> &[Repository] {
        match self {
            RepositoryListState::Loaded(repos) => repos,
            _ => &[],
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            RepositoryListState::Error(message) => Some(message),
            _ => None,
        }
    }
}
