//! Email relay: hands contact form submissions to EmailJS.

use async_trait::async_trait;
use serde::Serialize;
use tracing::{error, info};

use crate::config::RelayConfig;
use crate::types::contact::ContactSubmission;
use crate::types::errors::{AppError, RelayError};

/// Delivers a submission somewhere a human will read it.
#[async_trait]
pub trait EmailRelay: Send + Sync {
    /// One attempt; resolves to success or failure only.
    async fn send(&self, submission: &ContactSubmission) -> Result<(), RelayError>;
}

/// Body of `POST /api/v1.0/email/send`.
#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a ContactSubmission,
}

/// EmailJS REST client with fixed routing identifiers.
pub struct EmailJsRelay {
    client: reqwest::Client,
    send_url: String,
    config: RelayConfig,
}

impl EmailJsRelay {
    pub fn new(config: &RelayConfig) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::HttpClient(e.to_string()))?;
        Ok(Self {
            client,
            send_url: config.send_url(),
            config: config.clone(),
        })
    }
}

#[async_trait]
impl EmailRelay for EmailJsRelay {
    async fn send(&self, submission: &ContactSubmission) -> Result<(), RelayError> {
        let body = SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            template_params: submission,
        };

        let response = self
            .client
            .post(&self.send_url)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "email relay request failed");
                RelayError::Transport(e.to_string())
            })?;

        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        if status.is_success() {
            info!(response = %text, "email relay accepted message");
            Ok(())
        } else {
            error!(status = status.as_u16(), response = %text, "email relay rejected message");
            Err(RelayError::Rejected {
                status: status.as_u16(),
                body: text,
            })
        }
    }
}
