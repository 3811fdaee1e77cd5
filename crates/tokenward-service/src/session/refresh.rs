//! Refresh-secret rotation.

use chrono::Utc;
use tracing::{debug, info, warn};

use tokenward_core::error::{AppError, ErrorKind};
use tokenward_entity::account::SessionState;

use super::pair::TokenPair;
use super::service::SessionService;

impl SessionService {
    /// Exchanges a valid access token and refresh secret for a new pair.
    ///
    /// Checks run in a fixed order: token signature, account lookup, session
    /// expiry, secret match, client address. Only the last two can mutate
    /// state. An expired access token is accepted as long as its signature
    /// verifies; the refresh session's own expiry is what bounds renewal.
    /// A stored hash that cannot be evaluated fails with `Internal` rather
    /// than passing as a mismatch.
    ///
    /// When the client address differs from the one bound into the access
    /// token, the session is revoked, a warning is sent, and the call fails
    /// with `SecurityAnomaly`. If the warning could not be delivered the
    /// returned error still has kind `SecurityAnomaly` and carries the
    /// notifier failure as its source.
    pub async fn refresh_tokens(
        &self,
        access_token: &str,
        refresh_secret: &str,
        client_ip: &str,
    ) -> Result<TokenPair, AppError> {
        let claims = self.tokens.parse_access_token(access_token)?;

        let mut account = self
            .store
            .find_by_id(claims.subject())
            .await?
            .ok_or_else(|| AppError::not_found("Account not found"))?;

        let state = account.session_state(Utc::now());
        let stored_hash = match (state, &account.session) {
            (SessionState::Active, Some(session)) => session.refresh_hash.clone(),
            _ => {
                debug!(account_id = %account.id, %state, "Refresh without a live session");
                return Err(AppError::expired_session("Session expired or absent"));
            }
        };

        if !self.hasher.verify(refresh_secret, &stored_hash)? {
            debug!(account_id = %account.id, "Refresh secret mismatch");
            return Err(AppError::invalid_refresh_token(
                "Refresh secret does not match",
            ));
        }

        if claims.issued_ip() != client_ip {
            warn!(
                account_id = %account.id,
                issued_ip = claims.issued_ip(),
                client_ip,
                "Client address changed during refresh, revoking session"
            );
            let err = self
                .revoke_for_anomaly(&account.email, claims.issued_ip(), client_ip)
                .await;
            return Err(err);
        }

        let pair = self.install_new_session(&mut account, claims.issued_ip())?;
        self.store.update(&account).await?;

        info!(account_id = %account.id, "Session rotated");
        Ok(pair)
    }

    /// Runs revoke-and-notify and turns its outcome into the error returned
    /// to the refresh caller.
    async fn revoke_for_anomaly(&self, email: &str, old_ip: &str, new_ip: &str) -> AppError {
        match self.revoke_and_notify(email, old_ip, new_ip).await {
            Ok(()) => AppError::security_anomaly("Client address changed; session revoked"),
            Err(e) if e.is(ErrorKind::Notify) => AppError::with_source(
                ErrorKind::SecurityAnomaly,
                "Client address changed; session revoked, warning delivery failed",
                e,
            ),
            Err(e) => e,
        }
    }
}
