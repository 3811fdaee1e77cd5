//! The identity store contract.

use async_trait::async_trait;

use tokenward_core::result::AppResult;
use tokenward_core::types::{AccountId, PageRequest};
use tokenward_entity::account::Account;

/// Durable account records.
///
/// Implementations must make each individual `insert`/`update` atomic for
/// the record it touches; callers hold no locks of their own.
#[async_trait]
pub trait AccountStore: Send + Sync + std::fmt::Debug + 'static {
    /// Find an account by primary key.
    async fn find_by_id(&self, id: AccountId) -> AppResult<Option<Account>>;

    /// Find an account by its exact email address.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>>;

    /// Insert a new account. Fails with `DuplicateEmail` if the email is taken.
    async fn insert(&self, account: &Account) -> AppResult<()>;

    /// Replace the stored record with `account`. Fails with `NotFound` if no
    /// record with that id exists.
    async fn update(&self, account: &Account) -> AppResult<()>;

    /// One page of accounts ordered by ascending id, plus the total count.
    async fn list(&self, page: PageRequest) -> AppResult<(Vec<Account>, u64)>;

    /// Confirm the backing store answers. Fails with `Store` otherwise.
    async fn health_check(&self) -> AppResult<()>;
}
