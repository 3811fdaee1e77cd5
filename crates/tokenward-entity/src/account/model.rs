//! Account entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tokenward_core::types::AccountId;

use super::session::{RefreshSession, SessionState};

/// An identity that can hold at most one refresh session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Unique account identifier.
    pub id: AccountId,
    /// Unique email address, also the destination for security warnings.
    pub email: String,
    /// The current refresh session, if any.
    #[serde(skip_serializing)]
    pub session: Option<RefreshSession>,
}

impl Account {
    /// Create a new account with a fresh id and no session.
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            id: AccountId::new(),
            email: email.into(),
            session: None,
        }
    }

    /// Replace whatever session existed with a new one.
    pub fn install_session(&mut self, refresh_hash: String, expires_at: DateTime<Utc>) {
        self.session = Some(RefreshSession::new(refresh_hash, expires_at));
    }

    /// Drop the current session. Returns `true` if one was present.
    pub fn revoke_session(&mut self) -> bool {
        self.session.take().is_some()
    }

    /// Derive the session state at `now`.
    pub fn session_state(&self, now: DateTime<Utc>) -> SessionState {
        match &self.session {
            None => SessionState::None,
            Some(session) if session.is_expired_at(now) => SessionState::Expired,
            Some(_) => SessionState::Active,
        }
    }

    /// Whether a session is present at all, expired or not.
    pub fn has_session(&self) -> bool {
        self.session.is_some()
    }
}
