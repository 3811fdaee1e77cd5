//! Session orchestration over the account store and token manager.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use tokenward_auth::{RefreshHasher, TokenManager};
use tokenward_core::error::AppError;
use tokenward_core::traits::Notifier;
use tokenward_core::types::{AccountId, Page, PageRequest};
use tokenward_database::AccountStore;
use tokenward_entity::account::Account;

use super::pair::TokenPair;

/// The only component that mutates account session state.
///
/// Holds nothing but shared handles to its collaborators, so it is cheap to
/// clone and safe to call concurrently. Per-record atomicity comes from the
/// store; concurrent writers to one account are last-writer-wins.
#[derive(Debug, Clone)]
pub struct SessionService {
    /// Durable account records.
    pub(crate) store: Arc<dyn AccountStore>,
    /// Access-token and refresh-secret issuance.
    pub(crate) tokens: Arc<TokenManager>,
    /// Refresh-secret hashing.
    pub(crate) hasher: Arc<RefreshHasher>,
    /// Outbound warnings.
    pub(crate) notifier: Arc<dyn Notifier>,
}

impl SessionService {
    /// Creates a new session service.
    pub fn new(
        store: Arc<dyn AccountStore>,
        tokens: Arc<TokenManager>,
        hasher: Arc<RefreshHasher>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            store,
            tokens,
            hasher,
            notifier,
        }
    }

    /// Registers a new account with no session.
    pub async fn sign_up(&self, email: &str) -> Result<Account, AppError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(AppError::validation("Email is required"));
        }

        let account = Account::new(email);
        self.store.insert(&account).await?;

        info!(account_id = %account.id, "Account created");
        Ok(account)
    }

    /// Starts a new session for `account_id`, replacing any existing one.
    ///
    /// No credential is checked: possessing the id is sufficient.
    pub async fn sign_in(
        &self,
        account_id: AccountId,
        client_ip: &str,
    ) -> Result<TokenPair, AppError> {
        let mut account = self
            .store
            .find_by_id(account_id)
            .await?
            .ok_or_else(|| AppError::not_found("Account not found"))?;

        let pair = self.install_new_session(&mut account, client_ip)?;
        self.store.update(&account).await?;

        info!(account_id = %account.id, ip = client_ip, "Session started");
        Ok(pair)
    }

    /// One page of accounts in ascending id order. Inputs are not clamped.
    pub async fn list_accounts(&self, page: i64, limit: i64) -> Result<Page<Account>, AppError> {
        let request = PageRequest::new(page, limit);
        let (accounts, total) = self.store.list(request).await?;
        Ok(Page::new(accounts, total, request))
    }

    /// Issues a fresh pair bound to `ip` and writes its hash into `account`.
    ///
    /// The account is only modified in memory; the caller persists it.
    pub(crate) fn install_new_session(
        &self,
        account: &mut Account,
        ip: &str,
    ) -> Result<TokenPair, AppError> {
        let (access_token, access_expires_at) = self.tokens.issue_access_token(account.id, ip)?;
        let refresh_token = self.tokens.issue_refresh_secret()?;
        let refresh_hash = self.hasher.hash(&refresh_token)?;
        let refresh_expires_at = self.tokens.refresh_expiry_from(Utc::now())?;

        account.install_session(refresh_hash, refresh_expires_at);

        Ok(TokenPair {
            access_token,
            refresh_token,
            access_expires_at,
            refresh_expires_at,
        })
    }
}
