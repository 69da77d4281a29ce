//! Mail delivery collaborator
//! Sends notification emails through the provider's HTTP JSON API and keeps
//! credential rejection distinguishable from transport failures.

use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, error};

use crate::config::MailConfig;

#[derive(Error, Debug)]
pub enum MailError {
    #[error("email service rejected the configured credentials")]
    Auth,
    #[error("email service request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("email service returned status {0}")]
    Status(reqwest::StatusCode),
}

impl MailError {
    pub fn is_auth(&self) -> bool {
        matches!(self, MailError::Auth)
    }
}

/// A single outgoing message as accepted by the delivery API.
#[derive(Debug, Clone, Serialize)]
pub struct Email {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html: String,
}

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: Email) -> Result<(), MailError>;
}

/// Mail delivery over the provider's HTTP endpoint.
pub struct HttpMailer {
    config: MailConfig,
    client: reqwest::Client,
    request_timeout: Duration,
}

impl HttpMailer {
    pub fn new(config: MailConfig) -> Self {
        HttpMailer {
            config,
            client: reqwest::Client::new(),
            request_timeout: Duration::from_secs(15),
        }
    }
}

#[async_trait]
impl Mailer for HttpMailer {
    async fn send(&self, email: Email) -> Result<(), MailError> {
        debug!(to = %email.to, subject = %email.subject, "sending email");

        let response = self
            .client
            .post(&self.config.api_url)
            .timeout(self.request_timeout)
            .bearer_auth(&self.config.api_key)
            .json(&email)
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            error!(%status, "mail API rejected credentials");
            return Err(MailError::Auth);
        }
        if !status.is_success() {
            error!(%status, "mail API returned failure status");
            return Err(MailError::Status(status));
        }

        debug!(to = %email.to, "email accepted by mail API");
        Ok(())
    }
}
