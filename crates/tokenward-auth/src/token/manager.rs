//! Stateless issuance and verification of session credentials.

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use tokenward_core::config::AuthConfig;
use tokenward_core::error::AppError;
use tokenward_core::types::AccountId;

use crate::jwt::{AccessClaims, JwtDecoder, JwtEncoder};
use crate::refresh::generate_refresh_secret;

/// Issues and verifies access tokens and generates refresh secrets.
///
/// Keyed only by a signing secret and two lifetimes; holds no other state.
#[derive(Debug, Clone)]
pub struct TokenManager {
    encoder: JwtEncoder,
    decoder: JwtDecoder,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl TokenManager {
    /// Creates a token manager.
    ///
    /// Fails with a configuration error if the secret is empty or either
    /// lifetime is not positive or would push an expiry out of range.
    pub fn new(
        signing_secret: &str,
        access_ttl: Duration,
        refresh_ttl: Duration,
    ) -> Result<Self, AppError> {
        if signing_secret.is_empty() {
            return Err(AppError::configuration("Signing secret must not be empty"));
        }
        if access_ttl <= Duration::zero() {
            return Err(AppError::configuration("Access token TTL must be positive"));
        }
        if refresh_ttl <= Duration::zero() {
            return Err(AppError::configuration("Refresh token TTL must be positive"));
        }
        let now = Utc::now();
        if now.checked_add_signed(access_ttl).is_none() {
            return Err(AppError::configuration("Access token TTL is out of range"));
        }
        if now.checked_add_signed(refresh_ttl).is_none() {
            return Err(AppError::configuration("Refresh token TTL is out of range"));
        }

        Ok(Self {
            encoder: JwtEncoder::new(signing_secret.as_bytes(), access_ttl),
            decoder: JwtDecoder::new(signing_secret.as_bytes()),
            access_ttl,
            refresh_ttl,
        })
    }

    /// Creates a token manager from auth configuration.
    pub fn from_config(config: &AuthConfig) -> Result<Self, AppError> {
        Self::new(
            &config.jwt_secret,
            config.access_ttl()?,
            config.refresh_ttl()?,
        )
    }

    /// Issues a signed access token carrying `{sub, ip, exp}`.
    pub fn issue_access_token(
        &self,
        subject: AccountId,
        ip: &str,
    ) -> Result<(String, DateTime<Utc>), AppError> {
        let issued = self.encoder.encode_access_token(subject, ip)?;
        debug!(account_id = %subject, "Issued access token");
        Ok(issued)
    }

    /// Generates a fresh base64-encoded refresh secret.
    pub fn issue_refresh_secret(&self) -> Result<String, AppError> {
        generate_refresh_secret()
    }

    /// Verifies an access token and returns its claims.
    ///
    /// Expired tokens still parse; use [`AccessClaims::is_expired`] to check.
    pub fn parse_access_token(&self, token: &str) -> Result<AccessClaims, AppError> {
        self.decoder.decode_access_token(token)
    }

    /// Access token lifetime.
    pub fn access_ttl(&self) -> Duration {
        self.access_ttl
    }

    /// Refresh secret lifetime.
    pub fn refresh_ttl(&self) -> Duration {
        self.refresh_ttl
    }

    /// Expiry of a refresh secret issued at `now`.
    pub fn refresh_expiry_from(&self, now: DateTime<Utc>) -> Result<DateTime<Utc>, AppError> {
        now.checked_add_signed(self.refresh_ttl)
            .ok_or_else(|| AppError::internal("Refresh expiry is out of range"))
    }
}
