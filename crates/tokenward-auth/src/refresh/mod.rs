//! Refresh-secret generation and hashing.

pub mod hasher;
pub mod secret;

pub use hasher::RefreshHasher;
pub use secret::generate_refresh_secret;
