//! Claims carried by every access token.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tokenward_core::types::AccountId;

/// Payload of an access token: `{sub, ip, exp}` plus a random `jti` so two
/// tokens issued within the same second still differ.
///
/// Never persisted; derived from the token on every parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Subject, the account ID.
    pub sub: Uuid,
    /// Client address observed when the token was issued.
    pub ip: String,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
    /// Unique token ID.
    #[serde(default)]
    pub jti: Uuid,
}

impl AccessClaims {
    /// Returns the account the token was issued to.
    pub fn subject(&self) -> AccountId {
        AccountId::from_uuid(self.sub)
    }

    /// Returns the client address bound at issuance.
    pub fn issued_ip(&self) -> &str {
        &self.ip
    }

    /// Returns the expiration as a `DateTime<Utc>`.
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or(DateTime::<Utc>::MIN_UTC)
    }

    /// Checks whether this token has expired.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }
}
