use thiserror::Error;

use super::repository::PROJECTS_UNAVAILABLE;

// === FetchError ===

/// Failure to obtain the repository listing.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never produced a response.
    #[error("GitHub request failed: {0}")]
    Transport(String),
    /// The API answered with a non-success status.
    #[error("GitHub API error: {status}")]
    Status { status: u16 },
    /// The response body was not a repository array.
    #[error("GitHub response could not be decoded: {0}")]
    Decode(String),
}

impl FetchError {
    /// Text shown to the visitor. Identical for every cause.
    pub fn user_message(&self) -> &'static str {
        PROJECTS_UNAVAILABLE
    }
}

// === RelayError ===

/// Failure of the email relay call.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Email relay request failed: {0}")]
    Transport(String),
    #[error("Email relay rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },
}

// === ConfigError ===

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required identifier is empty.
    #[error("Missing configuration value: {0}")]
    Missing(&'static str),
    /// An API base is not an absolute http(s) URL.
    #[error("Invalid URL for {field}: {value}")]
    InvalidUrl { field: &'static str, value: String },
    #[error("Configuration could not be parsed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Failed to read configuration file {}: {source}", path.display())]
    Read {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// === TelemetryError ===

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("Invalid log level/filter '{value}'")]
    EnvFilter {
        value: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },
    #[error("Telemetry error: {0}")]
    Subscriber(Box<dyn std::error::Error + Send + Sync>),
}

// === AppError ===

/// Errors that stop the application from starting.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(String),
    #[error("Failed to start async runtime: {0}")]
    Runtime(#[from] std::io::Error),
    #[error("Window error: {0}")]
    Window(String),
}
