//! Notifier that hands messages to an HTTP mail relay.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, error};

use tokenward_core::config::NotifierConfig;
use tokenward_core::error::{AppError, ErrorKind};
use tokenward_core::result::AppResult;
use tokenward_core::traits::Notifier;

/// JSON payload posted to the relay.
#[derive(Debug, Serialize)]
struct WebhookMessage<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    body: &'a str,
}

/// POSTs `{from, to, subject, body}` to a configured URL.
#[derive(Debug, Clone)]
pub struct WebhookNotifier {
    client: reqwest::Client,
    url: String,
    sender: String,
}

impl WebhookNotifier {
    /// Creates a webhook notifier with its own HTTP client.
    pub fn new(
        url: impl Into<String>,
        sender: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Configuration,
                    "Failed to build notifier HTTP client",
                    e,
                )
            })?;

        Ok(Self::with_client(client, url, sender))
    }

    /// Creates a webhook notifier around an existing HTTP client.
    pub fn with_client(
        client: reqwest::Client,
        url: impl Into<String>,
        sender: impl Into<String>,
    ) -> Self {
        Self {
            client,
            url: url.into(),
            sender: sender.into(),
        }
    }

    /// Creates a webhook notifier from configuration.
    pub fn from_config(config: &NotifierConfig) -> Result<Self, AppError> {
        let url = config
            .webhook_url
            .as_deref()
            .filter(|url| !url.is_empty())
            .ok_or_else(|| AppError::configuration("notifier.webhook_url is required"))?;

        Self::new(
            url,
            config.sender.clone(),
            Duration::from_secs(config.timeout_seconds),
        )
    }
}

#[async_trait]
impl Notifier for WebhookNotifier {
    async fn send(&self, to: &str, subject: &str, body: &str) -> AppResult<()> {
        let message = WebhookMessage {
            from: &self.sender,
            to,
            subject,
            body,
        };

        let response = self
            .client
            .post(&self.url)
            .json(&message)
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Notify, "Notification relay unreachable", e)
            })?;

        let status = response.status();
        if !status.is_success() {
            error!(%status, "Notification relay rejected message");
            return Err(AppError::notify(format!(
                "Notification relay returned {status}"
            )));
        }

        debug!(to, "Notification delivered to relay");
        Ok(())
    }
}
