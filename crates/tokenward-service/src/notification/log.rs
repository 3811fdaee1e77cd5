//! Notifier that writes messages to the log.

use async_trait::async_trait;
use tracing::warn;

use tokenward_core::result::AppResult;
use tokenward_core::traits::Notifier;

/// Emits each message as a structured `warn` event instead of delivering it.
#[derive(Debug, Clone)]
pub struct LogNotifier {
    sender: String,
}

impl LogNotifier {
    /// Creates a log notifier that reports `sender` as the origin.
    pub fn new(sender: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
        }
    }
}

#[async_trait]
impl Notifier for LogNotifier {
    async fn send(&self, to: &str, subject: &str, body: &str) -> AppResult<()> {
        warn!(from = %self.sender, to, subject, body, "Security notification");
        Ok(())
    }
}
