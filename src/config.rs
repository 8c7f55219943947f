//! Site configuration.
//!
//! Identifiers for the listing owner and the email relay are supplied at build
//! time through `option_env!`, falling back to the values the site was
//! published with. A JSON file can override any subset at deploy time: the
//! path in `PORTFOLIO_CONFIG`, or `portfolio.json` beside the executable.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::types::errors::ConfigError;

pub const DEFAULT_GITHUB_API: &str = "https://api.github.com";
pub const DEFAULT_EMAILJS_API: &str = "https://api.emailjs.com";

/// Environment variable naming an override file.
pub const CONFIG_PATH_ENV: &str = "PORTFOLIO_CONFIG";
/// Override file looked up next to the executable.
pub const CONFIG_FILE_NAME: &str = "portfolio.json";

/// Top-level configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub github: GitHubConfig,
    pub relay: RelayConfig,
    /// Default `EnvFilter` directive when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            github: GitHubConfig::default(),
            relay: RelayConfig::default(),
            log_level: option_env!("PORTFOLIO_LOG_LEVEL").unwrap_or("info").to_string(),
        }
    }
}

/// Repository listing endpoint settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GitHubConfig {
    pub api_base: String,
    pub owner: String,
    pub user_agent: String,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_GITHUB_API.to_string(),
            owner: option_env!("PORTFOLIO_GITHUB_OWNER").unwrap_or("Mano-8055").to_string(),
            user_agent: concat!("portfolio/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl GitHubConfig {
    /// Listing URL, newest repositories first.
    pub fn repos_url(&self) -> String {
        format!(
            "{}/users/{}/repos?sort=created&direction=desc",
            self.api_base.trim_end_matches('/'),
            self.owner
        )
    }
}

/// Email relay (EmailJS) routing identifiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelayConfig {
    pub api_base: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_EMAILJS_API.to_string(),
            service_id: option_env!("PORTFOLIO_EMAILJS_SERVICE_ID")
                .unwrap_or("service_jh1mgvn")
                .to_string(),
            template_id: option_env!("PORTFOLIO_EMAILJS_TEMPLATE_ID")
                .unwrap_or("template_xy8ra8e")
                .to_string(),
            public_key: option_env!("PORTFOLIO_EMAILJS_PUBLIC_KEY")
                .unwrap_or("crw0OW6hsz2xKetZA")
                .to_string(),
        }
    }
}

impl RelayConfig {
    pub fn send_url(&self) -> String {
        format!("{}/api/v1.0/email/send", self.api_base.trim_end_matches('/'))
    }
}

impl SiteConfig {
    /// Parses a (possibly partial) JSON override and validates the result.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates an override file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Where the deploy-time override lives, if anywhere.
    ///
    /// An explicit `PORTFOLIO_CONFIG` always wins and must exist; the file
    /// beside the executable is only used when present.
    pub fn override_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_PATH_ENV).filter(|p| !p.is_empty()) {
            return Some(PathBuf::from(path));
        }
        let exe = std::env::current_exe().ok()?;
        let candidate = exe.parent()?.join(CONFIG_FILE_NAME);
        candidate.is_file().then_some(candidate)
    }

    /// Configuration for this process: the override file when one is found,
    /// otherwise the build-time defaults.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(Self::override_path().as_deref())
    }

    pub fn load_with(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let config = Self::default();
                config.validate()?;
                Ok(config)
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_url("github.api_base", &self.github.api_base)?;
        check_url("relay.api_base", &self.relay.api_base)?;
        let required = [
            ("github.owner", &self.github.owner),
            ("github.user_agent", &self.github.user_agent),
            ("relay.service_id", &self.relay.service_id),
            ("relay.template_id", &self.relay.template_id),
            ("relay.public_key", &self.relay.public_key),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::Missing(field));
            }
        }
        Ok(())
    }
}

fn check_url(field: &'static str, value: &str) -> Result<(), ConfigError> {
    let valid = reqwest::Url::parse(value)
        .map(|url| {
            matches!(url.scheme(), "http" | "https")
                && url.host_str().is_some_and(|host| !host.is_empty())
        })
        .unwrap_or(false);
    if valid {
        Ok(())
    } else {
        Err(ConfigError::InvalidUrl {
            field,
            value: value.to_string(),
        })
    }
}
