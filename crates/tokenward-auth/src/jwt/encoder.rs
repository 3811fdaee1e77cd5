//! Access-token creation.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use uuid::Uuid;

use tokenward_core::error::{AppError, ErrorKind};
use tokenward_core::types::AccountId;

use super::claims::AccessClaims;

/// Signs access tokens with HS512.
#[derive(Clone)]
pub struct JwtEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Access token lifetime.
    access_ttl: Duration,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("access_ttl", &self.access_ttl)
            .finish_non_exhaustive()
    }
}

impl JwtEncoder {
    /// Creates a new encoder. The secret must already be validated.
    pub fn new(secret: &[u8], access_ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            access_ttl,
        }
    }

    /// Issues an access token bound to `subject` and `ip`.
    ///
    /// Returns the compact token together with its expiry.
    pub fn encode_access_token(
        &self,
        subject: AccountId,
        ip: &str,
    ) -> Result<(String, DateTime<Utc>), AppError> {
        let expires_at = Utc::now()
            .checked_add_signed(self.access_ttl)
            .ok_or_else(|| AppError::internal("Access token expiry is out of range"))?;
        let claims = AccessClaims {
            sub: subject.into_uuid(),
            ip: ip.to_string(),
            exp: expires_at.timestamp(),
            jti: Uuid::new_v4(),
        };

        let token = encode(&Header::new(Algorithm::HS512), &claims, &self.encoding_key)
            .map_err(|e| {
                AppError::with_source(ErrorKind::Internal, "Failed to encode access token", e)
            })?;

        Ok((token, expires_at))
    }
}
