//! Revocation and warning after a suspected token theft.

use tracing::{error, info};

use tokenward_core::error::AppError;

use super::service::SessionService;
use crate::notification::IpChangeWarning;

impl SessionService {
    /// Clears the session of the account owning `email`, then warns it.
    ///
    /// The revocation is persisted before the warning is attempted. If the
    /// account does not exist nothing is sent. A failed delivery surfaces as
    /// a `Notify` error with the session already revoked.
    pub async fn revoke_and_notify(
        &self,
        email: &str,
        old_ip: &str,
        new_ip: &str,
    ) -> Result<(), AppError> {
        let mut account = self
            .store
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::not_found("Account not found"))?;

        account.revoke_session();
        self.store.update(&account).await?;
        info!(account_id = %account.id, "Session revoked");

        let warning = IpChangeWarning::new(old_ip, new_ip);
        self.notifier
            .send(&account.email, warning.subject(), &warning.body())
            .await
            .inspect_err(|e| {
                error!(
                    account_id = %account.id,
                    error = %e,
                    "Failed to deliver IP change warning"
                );
            })
    }
}
