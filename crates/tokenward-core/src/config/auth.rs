//! Authentication configuration.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Access-token and refresh-secret configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for access-token signing (HMAC). Required.
    pub jwt_secret: String,
    /// Access token TTL in minutes.
    #[serde(default = "default_access_ttl")]
    pub access_ttl_minutes: i64,
    /// Refresh secret TTL in days.
    #[serde(default = "default_refresh_ttl")]
    pub refresh_ttl_days: i64,
    /// Cost parameters for refresh-secret hashing.
    #[serde(default)]
    pub refresh_hash: RefreshHashConfig,
}

/// Argon2id cost parameters used when hashing refresh secrets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshHashConfig {
    /// Memory cost in KiB.
    #[serde(default = "default_memory_kib")]
    pub memory_kib: u32,
    /// Number of passes.
    #[serde(default = "default_iterations")]
    pub iterations: u32,
    /// Degree of parallelism.
    #[serde(default = "default_parallelism")]
    pub parallelism: u32,
}

impl Default for RefreshHashConfig {
    fn default() -> Self {
        Self {
            memory_kib: default_memory_kib(),
            iterations: default_iterations(),
            parallelism: default_parallelism(),
        }
    }
}

impl AuthConfig {
    /// Reject an empty secret and TTLs that are not positive or that put the
    /// expiry past the representable calendar.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.jwt_secret.is_empty() {
            return Err(AppError::configuration("auth.jwt_secret must not be empty"));
        }
        self.access_ttl()?;
        self.refresh_ttl()?;
        Ok(())
    }

    /// Access token lifetime as a duration.
    pub fn access_ttl(&self) -> Result<Duration, AppError> {
        ttl(
            "auth.access_ttl_minutes",
            self.access_ttl_minutes,
            Duration::try_minutes,
        )
    }

    /// Refresh secret lifetime as a duration.
    pub fn refresh_ttl(&self) -> Result<Duration, AppError> {
        ttl(
            "auth.refresh_ttl_days",
            self.refresh_ttl_days,
            Duration::try_days,
        )
    }
}

fn ttl(
    key: &str,
    value: i64,
    convert: fn(i64) -> Option<Duration>,
) -> Result<Duration, AppError> {
    if value <= 0 {
        return Err(AppError::configuration(format!("{key} must be positive")));
    }
    convert(value)
        .filter(|ttl| Utc::now().checked_add_signed(*ttl).is_some())
        .ok_or_else(|| AppError::configuration(format!("{key} is out of range")))
}

fn default_access_ttl() -> i64 {
    15
}

fn default_refresh_ttl() -> i64 {
    30
}

fn default_memory_kib() -> u32 {
    19 * 1024
}

fn default_iterations() -> u32 {
    2
}

fn default_parallelism() -> u32 {
    1
}
