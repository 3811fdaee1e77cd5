//! Core type definitions used across the Tokenward workspace.

pub mod id;
pub mod pagination;

pub use id::AccountId;
pub use pagination::{Page, PageRequest};
