//! In-process account store backed by `DashMap`.

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::debug;

use tokenward_core::error::AppError;
use tokenward_core::result::AppResult;
use tokenward_core::types::{AccountId, PageRequest};
use tokenward_entity::account::Account;

use crate::store::AccountStore;

/// Account store held entirely in memory.
///
/// Each record lives behind its own shard lock, so individual reads and
/// writes are atomic per account. Contents are lost on restart.
#[derive(Debug, Default)]
pub struct MemoryAccountStore {
    accounts: DashMap<AccountId, Account>,
    emails: DashMap<String, AccountId>,
}

impl MemoryAccountStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored accounts.
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Whether the store holds no accounts.
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

#[async_trait]
impl AccountStore for MemoryAccountStore {
    async fn find_by_id(&self, id: AccountId) -> AppResult<Option<Account>> {
        Ok(self.accounts.get(&id).map(|entry| entry.value().clone()))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>> {
        let Some(id) = self.emails.get(email).map(|entry| *entry.value()) else {
            return Ok(None);
        };
        self.find_by_id(id).await
    }

    async fn insert(&self, account: &Account) -> AppResult<()> {
        match self.emails.entry(account.email.clone()) {
            Entry::Occupied(_) => return Err(AppError::duplicate_email("Email already in use")),
            Entry::Vacant(slot) => {
                slot.insert(account.id);
            }
        }

        match self.accounts.entry(account.id) {
            Entry::Occupied(_) => {
                self.emails.remove(&account.email);
                Err(AppError::store(format!(
                    "Account {} already exists",
                    account.id
                )))
            }
            Entry::Vacant(slot) => {
                slot.insert(account.clone());
                debug!(account_id = %account.id, "Inserted account");
                Ok(())
            }
        }
    }

    async fn update(&self, account: &Account) -> AppResult<()> {
        let Some(mut stored) = self.accounts.get_mut(&account.id) else {
            return Err(AppError::not_found(format!(
                "Account {} not found",
                account.id
            )));
        };

        if stored.email != account.email {
            match self.emails.entry(account.email.clone()) {
                Entry::Occupied(_) => {
                    return Err(AppError::duplicate_email("Email already in use"));
                }
                Entry::Vacant(slot) => {
                    slot.insert(account.id);
                }
            }
            self.emails.remove(&stored.email);
        }

        *stored = account.clone();
        Ok(())
    }

    async fn list(&self, page: PageRequest) -> AppResult<(Vec<Account>, u64)> {
        let mut all: Vec<Account> = self
            .accounts
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        let total = all.len() as u64;

        if !page.is_addressable() {
            return Ok((Vec::new(), total));
        }

        all.sort_by_key(|account| account.id);
        let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);
        let limit = usize::try_from(page.limit).unwrap_or(usize::MAX);

        Ok((all.into_iter().skip(offset).take(limit).collect(), total))
    }

    async fn health_check(&self) -> AppResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use tokenward_core::error::ErrorKind;

    #[tokio::test]
    async fn test_insert_and_find() {
        let store = MemoryAccountStore::new();
        let account = Account::new("a@x.com");
        store.insert(&account).await.unwrap();

        let by_id = store.find_by_id(account.id).await.unwrap().unwrap();
        let by_email = store.find_by_email("a@x.com").await.unwrap().unwrap();
        assert_eq!(by_id, account);
        assert_eq!(by_email, account);
        assert!(store.find_by_email("b@x.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let store = MemoryAccountStore::new();
        store.insert(&Account::new("a@x.com")).await.unwrap();

        let err = store.insert(&Account::new("a@x.com")).await.unwrap_err();
        assert!(err.is(ErrorKind::DuplicateEmail));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_update_replaces_record() {
        let store = MemoryAccountStore::new();
        let mut account = Account::new("a@x.com");
        store.insert(&account).await.unwrap();

        account.install_session("hash".to_string(), Utc::now() + Duration::days(1));
        store.update(&account).await.unwrap();

        let stored = store.find_by_id(account.id).await.unwrap().unwrap();
        assert!(stored.has_session());

        account.revoke_session();
        store.update(&account).await.unwrap();
        let stored = store.find_by_id(account.id).await.unwrap().unwrap();
        assert!(!stored.has_session());
    }

    #[tokio::test]
    async fn test_update_missing_account() {
        let store = MemoryAccountStore::new();
        let err = store.update(&Account::new("a@x.com")).await.unwrap_err();
        assert!(err.is(ErrorKind::NotFound));
    }

    #[tokio::test]
    async fn test_list_is_ordered_and_paged() {
        let store = MemoryAccountStore::new();
        for i in 0..5 {
            store
                .insert(&Account::new(format!("user{i}@x.com")))
                .await
                .unwrap();
        }

        let (first, total) = store.list(PageRequest::new(1, 2)).await.unwrap();
        let (second, _) = store.list(PageRequest::new(2, 2)).await.unwrap();
        let (third, _) = store.list(PageRequest::new(3, 2)).await.unwrap();
        assert_eq!(total, 5);
        assert_eq!(first.len(), 2);
        assert_eq!(second.len(), 2);
        assert_eq!(third.len(), 1);
        assert!(first[0].id < first[1].id);
        assert!(first[1].id < second[0].id);

        let (beyond, total) = store.list(PageRequest::new(10, 2)).await.unwrap();
        assert!(beyond.is_empty());
        assert_eq!(total, 5);
    }

    #[tokio::test]
    async fn test_health_check() {
        assert!(MemoryAccountStore::new().health_check().await.is_ok());
    }

    #[tokio::test]
    async fn test_list_non_positive_inputs_are_empty() {
        let store = MemoryAccountStore::new();
        store.insert(&Account::new("a@x.com")).await.unwrap();

        let (items, total) = store.list(PageRequest::new(0, 10)).await.unwrap();
        assert!(items.is_empty());
        assert_eq!(total, 1);

        let (items, _) = store.list(PageRequest::new(1, -1)).await.unwrap();
        assert!(items.is_empty());
    }
}
