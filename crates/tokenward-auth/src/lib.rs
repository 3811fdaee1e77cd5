//! # tokenward-auth
//!
//! Cryptographic building blocks for Tokenward sessions.
//!
//! ## Modules
//!
//! - `jwt` - HMAC-signed access tokens carrying `{sub, ip, exp}`
//! - `refresh` - 256-bit refresh secrets and their Argon2id digests
//! - `token` - the [`TokenManager`] facade used by the session service

pub mod jwt;
pub mod refresh;
pub mod token;

pub use jwt::{AccessClaims, JwtDecoder, JwtEncoder};
pub use refresh::{RefreshHasher, generate_refresh_secret};
pub use token::TokenManager;
