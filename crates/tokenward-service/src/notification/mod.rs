//! Outbound security notifications.
//!
//! Every transport implements [`Notifier`]; [`build_notifier`] picks one from
//! configuration.

pub mod log;
pub mod memory;
pub mod warning;
pub mod webhook;

use std::sync::Arc;

use tokenward_core::config::{NotifierConfig, NotifierProvider};
use tokenward_core::error::AppError;
use tokenward_core::traits::Notifier;

pub use log::LogNotifier;
pub use memory::{MemoryNotifier, SentMessage};
pub use warning::IpChangeWarning;
pub use webhook::WebhookNotifier;

/// Creates the notifier selected by `config.provider`.
pub fn build_notifier(config: &NotifierConfig) -> Result<Arc<dyn Notifier>, AppError> {
    match config.provider {
        NotifierProvider::Log => Ok(Arc::new(LogNotifier::new(config.sender.clone()))),
        NotifierProvider::Webhook => Ok(Arc::new(WebhookNotifier::from_config(config)?)),
    }
}
