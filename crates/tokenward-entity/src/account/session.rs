//! Refresh session value object.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The single active refresh record of an account.
///
/// Both fields are always present together; an account without a session
/// holds `None` rather than a half-populated value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshSession {
    /// Argon2id PHC string of the refresh secret.
    pub refresh_hash: String,
    /// Instant after which the refresh secret is no longer accepted.
    pub expires_at: DateTime<Utc>,
}

impl RefreshSession {
    /// Create a new session record.
    pub fn new(refresh_hash: String, expires_at: DateTime<Utc>) -> Self {
        Self {
            refresh_hash,
            expires_at,
        }
    }

    /// Whether the refresh secret has expired at `now`.
    ///
    /// The expiry instant itself is still valid.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}

/// Session state derived from an account's `session` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    /// Never signed in, or revoked after an anomaly.
    None,
    /// A session is present and not yet expired.
    Active,
    /// A session is present but its refresh secret has expired.
    Expired,
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Active => write!(f, "active"),
            Self::Expired => write!(f, "expired"),
        }
    }
}
