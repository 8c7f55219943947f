//! HTTP-level tests for the GitHub listing client using wiremock.
//!
//! Each test starts a mock GitHub API and points the client at it.

use portfolio::config::GitHubConfig;
use portfolio::services::github_projects::{GitHubProjects, RepositorySource};
use portfolio::types::errors::FetchError;
use serde_json::{json, Value};
use wiremock::matchers::{header, header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> GitHubConfig {
    GitHubConfig {
        api_base: server.uri(),
        owner: "octo".to_string(),
        user_agent: "portfolio-test".to_string(),
    }
}

fn repo_json(id: u64, fork: bool, archived: bool) -> Value {
    json!({
        "id": id,
        "name": format!("repo-{}", id),
        "description": "demo",
        "language": "Rust",
        "stargazers_count": id,
        "forks_count": 0,
        "created_at": "2025-01-15T08:30:00Z",
        "homepage": null,
        "html_url": format!("https://github.com/octo/repo-{}", id),
        "fork": fork,
        "archived": archived
    })
}

#[tokio::test]
async fn test_list_repositories_success() {
    let server = MockServer::start().await;
    let body: Vec<Value> = (1..=3).map(|id| repo_json(id, false, false)).collect();

    Mock::given(method("GET"))
        .and(path("/users/octo/repos"))
        .and(query_param("sort", "created"))
        .and(query_param("direction", "desc"))
        .and(header("accept", "application/vnd.github+json"))
        .and(header_exists("user-agent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(body)))
        .expect(1)
        .mount(&server)
        .await;

    let client = GitHubProjects::new(&config_for(&server)).unwrap();
    let repos = client.list_repositories().await.unwrap();

    assert_eq!(repos.len(), 3);
    assert_eq!(repos[0].name, "repo-1");
    assert_eq!(repos[2].stars, 3);
}

#[tokio::test]
async fn test_list_repositories_returns_forks_unfiltered() {
    // Filtering happens when the result is applied to the view.
    let server = MockServer::start().await;
    let body = json!([repo_json(1, true, false), repo_json(2, false, true)]);

    Mock::given(method("GET"))
        .and(path("/users/octo/repos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let client = GitHubProjects::new(&config_for(&server)).unwrap();
    let repos = client.list_repositories().await.unwrap();
    assert_eq!(repos.len(), 2);
    assert!(repos[0].is_fork);
    assert!(repos[1].is_archived);
}

#[tokio::test]
async fn test_forbidden_status_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/octo/repos"))
        .respond_with(
            ResponseTemplate::new(403).set_body_json(json!({"message": "API rate limit exceeded"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = GitHubProjects::new(&config_for(&server)).unwrap();
    let err = client.list_repositories().await.unwrap_err();
    assert!(matches!(err, FetchError::Status { status: 403 }), "got {:?}", err);
}

#[tokio::test]
async fn test_server_error_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = GitHubProjects::new(&config_for(&server)).unwrap();
    let err = client.list_repositories().await.unwrap_err();
    assert!(matches!(err, FetchError::Status { status: 500 }));
}

#[tokio::test]
async fn test_malformed_body_is_a_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = GitHubProjects::new(&config_for(&server)).unwrap();
    let err = client.list_repositories().await.unwrap_err();
    assert!(matches!(err, FetchError::Decode(_)));
}

#[tokio::test]
async fn test_unreachable_host_is_a_transport_error() {
    let config = GitHubConfig {
        api_base: "http://127.0.0.1:1".to_string(),
        owner: "octo".to_string(),
        user_agent: "portfolio-test".to_string(),
    };
    let client = GitHubProjects::new(&config).unwrap();
    let err = client.list_repositories().await.unwrap_err();
    assert!(matches!(err, FetchError::Transport(_)));
}
