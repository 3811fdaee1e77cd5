//! PostgreSQL-backed account store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use tokenward_core::error::{AppError, ErrorKind};
use tokenward_core::result::AppResult;
use tokenward_core::types::{AccountId, PageRequest};
use tokenward_entity::account::{Account, RefreshSession};

use crate::store::AccountStore;

const SELECT_COLUMNS: &str = "SELECT id, email, refresh_hash, refresh_expires_at FROM accounts";

/// Raw row shape of the `accounts` table.
#[derive(Debug, sqlx::FromRow)]
struct AccountRow {
    id: Uuid,
    email: String,
    refresh_hash: Option<String>,
    refresh_expires_at: Option<DateTime<Utc>>,
}

impl TryFrom<AccountRow> for Account {
    type Error = AppError;

    fn try_from(row: AccountRow) -> Result<Self, Self::Error> {
        let session = match (row.refresh_hash, row.refresh_expires_at) {
            (Some(hash), Some(expires_at)) => Some(RefreshSession::new(hash, expires_at)),
            (None, None) => None,
            _ => {
                return Err(AppError::store(format!(
                    "Account {} has a partially stored session",
                    row.id
                )));
            }
        };

        Ok(Account {
            id: AccountId::from_uuid(row.id),
            email: row.email,
            session,
        })
    }
}

/// Account store over the `accounts` table.
#[derive(Debug, Clone)]
pub struct PgAccountStore {
    pool: PgPool,
}

impl PgAccountStore {
    /// Create a new account store.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountStore for PgAccountStore {
    async fn find_by_id(&self, id: AccountId) -> AppResult<Option<Account>> {
        let row = sqlx::query_as::<_, AccountRow>(&format!("{SELECT_COLUMNS} WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Store, "Failed to find account by id", e)
            })?;

        row.map(Account::try_from).transpose()
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>> {
        let row = sqlx::query_as::<_, AccountRow>(&format!("{SELECT_COLUMNS} WHERE email = $1"))
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Store, "Failed to find account by email", e)
            })?;

        row.map(Account::try_from).transpose()
    }

    async fn insert(&self, account: &Account) -> AppResult<()> {
        let (hash, expires_at) = session_columns(account);

        sqlx::query(
            "INSERT INTO accounts (id, email, refresh_hash, refresh_expires_at) \
             VALUES ($1, $2, $3, $4)",
        )
        .bind(account.id)
        .bind(&account.email)
        .bind(hash)
        .bind(expires_at)
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("accounts_email_key") =>
            {
                AppError::duplicate_email("Email already in use")
            }
            _ => AppError::with_source(ErrorKind::Store, "Failed to insert account", e),
        })?;

        Ok(())
    }

    async fn update(&self, account: &Account) -> AppResult<()> {
        let (hash, expires_at) = session_columns(account);

        let result = sqlx::query(
            "UPDATE accounts SET email = $2, refresh_hash = $3, refresh_expires_at = $4 \
             WHERE id = $1",
        )
        .bind(account.id)
        .bind(&account.email)
        .bind(hash)
        .bind(expires_at)
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("accounts_email_key") =>
            {
                AppError::duplicate_email("Email already in use")
            }
            _ => AppError::with_source(ErrorKind::Store, "Failed to update account", e),
        })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!(
                "Account {} not found",
                account.id
            )));
        }

        Ok(())
    }

    async fn list(&self, page: PageRequest) -> AppResult<(Vec<Account>, u64)> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM accounts")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Store, "Failed to count accounts", e))?;

        if !page.is_addressable() {
            return Ok((Vec::new(), total as u64));
        }

        let rows = sqlx::query_as::<_, AccountRow>(&format!(
            "{SELECT_COLUMNS} ORDER BY id ASC LIMIT $1 OFFSET $2"
        ))
        .bind(page.limit)
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Store, "Failed to list accounts", e))?;

        let accounts = rows
            .into_iter()
            .map(Account::try_from)
            .collect::<AppResult<Vec<_>>>()?;

        Ok((accounts, total as u64))
    }

    async fn health_check(&self) -> AppResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Store, "Store health check failed", e))?;
        Ok(())
    }
}

fn session_columns(account: &Account) -> (Option<&str>, Option<DateTime<Utc>>) {
    match &account.session {
        Some(session) => (Some(session.refresh_hash.as_str()), Some(session.expires_at)),
        None => (None, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(hash: Option<&str>, expires_at: Option<DateTime<Utc>>) -> AccountRow {
        AccountRow {
            id: Uuid::new_v4(),
            email: "a@x.com".to_string(),
            refresh_hash: hash.map(str::to_string),
            refresh_expires_at: expires_at,
        }
    }

    #[test]
    fn test_row_without_session() {
        let account = Account::try_from(row(None, None)).expect("valid row");
        assert!(account.session.is_none());
    }

    #[test]
    fn test_row_with_session() {
        let expires_at = Utc::now();
        let account = Account::try_from(row(Some("h"), Some(expires_at))).expect("valid row");
        let session = account.session.expect("session");
        assert_eq!(session.refresh_hash, "h");
        assert_eq!(session.expires_at, expires_at);
    }

    #[test]
    fn test_half_populated_row_is_rejected() {
        let err = Account::try_from(row(Some("h"), None)).unwrap_err();
        assert!(err.is(ErrorKind::Store));

        let err = Account::try_from(row(None, Some(Utc::now()))).unwrap_err();
        assert!(err.is(ErrorKind::Store));
    }
}
