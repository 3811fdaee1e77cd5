//! Outbound notification configuration.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Which notifier implementation delivers warnings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum NotifierProvider {
    /// Write warnings to the log only.
    #[default]
    Log,
    /// POST warnings as JSON to a mail relay.
    Webhook,
}

/// Notifier configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotifierConfig {
    /// Delivery backend.
    #[serde(default)]
    pub provider: NotifierProvider,
    /// Relay endpoint for the `webhook` provider.
    #[serde(default)]
    pub webhook_url: Option<String>,
    /// From-address placed in outgoing messages.
    #[serde(default = "default_sender")]
    pub sender: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            provider: NotifierProvider::default(),
            webhook_url: None,
            sender: default_sender(),
            timeout_seconds: default_timeout(),
        }
    }
}

impl NotifierConfig {
    /// The webhook provider needs a URL.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.provider == NotifierProvider::Webhook
            && self.webhook_url.as_deref().is_none_or(str::is_empty)
        {
            return Err(AppError::configuration(
                "notifier.webhook_url is required for the webhook provider",
            ));
        }
        Ok(())
    }
}

fn default_sender() -> String {
    "security@tokenward.local".to_string()
}

fn default_timeout() -> u64 {
    10
}
