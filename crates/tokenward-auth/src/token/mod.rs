//! The token manager facade.

pub mod manager;

pub use manager::TokenManager;
