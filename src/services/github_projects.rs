//! GitHub project listing.
//!
//! Fetches the owner's public repositories (newest first) and selects the
//! ones shown in the projects grid.

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use tracing::{debug, error};

use crate::config::GitHubConfig;
use crate::types::errors::{AppError, FetchError};
use crate::types::repository::{Repository, SHOWCASE_LIMIT};

/// Source of the repository listing.
#[async_trait]
pub trait RepositorySource: Send + Sync {
    /// Issues exactly one request. No retries.
    async fn list_repositories(&self) -> Result<Vec<Repository>, FetchError>;
}

/// Client for `GET /users/{owner}/repos`.
pub struct GitHubProjects {
    client: reqwest::Client,
    repos_url: String,
}

impl GitHubProjects {
    pub fn new(config: &GitHubConfig) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| AppError::HttpClient(e.to_string()))?;
        Ok(Self {
            client,
            repos_url: config.repos_url(),
        })
    }

    pub fn repos_url(&self) -> &str {
        &self.repos_url
    }
}

#[async_trait]
impl RepositorySource for GitHubProjects {
    async fn list_repositories(&self) -> Result<Vec<Repository>, FetchError> {
        debug!(url = %self.repos_url, "fetching repository listing");
        let response = self
            .client
            .get(&self.repos_url)
            .header(ACCEPT, "application/vnd.github+json")
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "failed to fetch repos");
                FetchError::Transport(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            error!(status = status.as_u16(), "failed to fetch repos");
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        decode_listing(&body).inspect_err(|e| error!(error = %e, "failed to fetch repos"))
    }
}

/// Parses a listing response body.
pub fn decode_listing(body: &str) -> Result<Vec<Repository>, FetchError> {
    serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))
}

/// Drops forks and archived repositories, then keeps the first
/// [`SHOWCASE_LIMIT`] in the order received.
pub fn select_showcase(repos: Vec<Repository>) -> Vec<Repository> {
    repos
        .into_iter()
        .filter(|repo| repo.is_showcased())
        .take(SHOWCASE_LIMIT)
        .collect()
}
