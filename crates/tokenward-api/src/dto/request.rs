//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Sign-up request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignUpRequest {
    /// Email address of the new account.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
}

/// Sign-in request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignInRequest {
    /// Account to start a session for.
    pub account_id: Uuid,
}

/// Token refresh request body.
#[derive(Clone, Serialize, Deserialize, Validate)]
pub struct RefreshRequest {
    /// Access token from the current pair. May be expired.
    #[validate(length(min = 1, message = "Access token is required"))]
    pub access_token: String,
    /// Refresh secret from the current pair.
    #[validate(length(min = 1, message = "Refresh token is required"))]
    pub refresh_token: String,
}

impl std::fmt::Debug for RefreshRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RefreshRequest").finish_non_exhaustive()
    }
}
