//! # tokenward-database
//!
//! The [`AccountStore`] contract consumed by the session service, plus its
//! PostgreSQL and in-memory implementations and connection management.

pub mod connection;
pub mod migration;
pub mod repositories;
pub mod store;

pub use repositories::{MemoryAccountStore, PgAccountStore};
pub use store::AccountStore;
