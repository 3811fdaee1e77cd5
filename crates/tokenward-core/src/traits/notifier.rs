//! Notifier trait for outbound warning delivery.

use async_trait::async_trait;

use crate::result::AppResult;

/// Delivers a single message to a recipient address.
///
/// Delivery is best-effort: implementations report failure through
/// [`ErrorKind::Notify`](crate::error::ErrorKind::Notify) and never retry.
#[async_trait]
pub trait Notifier: Send + Sync + std::fmt::Debug + 'static {
    /// Send `body` under `subject` to `to`.
    async fn send(&self, to: &str, subject: &str, body: &str) -> AppResult<()>;
}
