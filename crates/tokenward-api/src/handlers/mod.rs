//! Request handlers grouped by resource.

pub mod account;
pub mod auth;
pub mod health;
