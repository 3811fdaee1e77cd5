//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tokenward_entity::account::Account;
use tokenward_service::TokenPair;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Public view of an account. Never includes session material.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountResponse {
    /// Account ID.
    pub id: Uuid,
    /// Email.
    pub email: String,
    /// Whether a refresh session is currently stored.
    pub has_session: bool,
}

impl From<&Account> for AccountResponse {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id.into_uuid(),
            email: account.email.clone(),
            has_session: account.has_session(),
        }
    }
}

/// A freshly issued credential pair.
#[derive(Clone, Serialize, Deserialize)]
pub struct TokenPairResponse {
    /// Access token.
    pub access_token: String,
    /// Refresh secret.
    pub refresh_token: String,
    /// Access token expiration.
    pub access_expires_at: DateTime<Utc>,
    /// Refresh secret expiration.
    pub refresh_expires_at: DateTime<Utc>,
}

impl From<TokenPair> for TokenPairResponse {
    fn from(pair: TokenPair) -> Self {
        Self {
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
            access_expires_at: pair.access_expires_at,
            refresh_expires_at: pair.refresh_expires_at,
        }
    }
}

/// One page of accounts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountListResponse {
    /// Accounts on this page.
    pub accounts: Vec<AccountResponse>,
    /// Total account count.
    pub total: u64,
    /// Requested page.
    pub page: i64,
    /// Requested page size.
    pub limit: i64,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status: `ok` or `degraded`.
    pub status: String,
    /// Identity store reachability: `ok` or `unreachable`.
    pub store: String,
    /// Server version.
    pub version: String,
}
