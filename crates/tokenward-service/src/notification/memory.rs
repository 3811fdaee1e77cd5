//! In-process notifier that records messages.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;

use tokenward_core::error::AppError;
use tokenward_core::result::AppResult;
use tokenward_core::traits::Notifier;

/// A message accepted by [`MemoryNotifier`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    /// Recipient address.
    pub to: String,
    /// Subject line.
    pub subject: String,
    /// Message body.
    pub body: String,
}

/// Keeps every sent message in an outbox. Can be switched into a failing
/// mode where every send returns a `Notify` error.
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    outbox: Mutex<Vec<SentMessage>>,
    failing: AtomicBool,
}

impl MemoryNotifier {
    /// Creates an empty, working notifier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a notifier whose sends always fail.
    pub fn failing() -> Self {
        let notifier = Self::default();
        notifier.set_failing(true);
        notifier
    }

    /// Toggles failing mode.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Snapshot of the delivered messages.
    pub fn sent(&self) -> Vec<SentMessage> {
        self.outbox
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

#[async_trait]
impl Notifier for MemoryNotifier {
    async fn send(&self, to: &str, subject: &str, body: &str) -> AppResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(AppError::notify("Notification delivery failed"));
        }

        self.outbox
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(SentMessage {
                to: to.to_string(),
                subject: subject.to_string(),
                body: body.to_string(),
            });
        Ok(())
    }
}
