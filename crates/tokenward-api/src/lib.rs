//! # tokenward-api
//!
//! HTTP API layer for Tokenward built on Axum.
//!
//! Exposes sign-up, sign-in, refresh, and account listing, resolves the
//! client address for IP pinning, and maps domain errors to responses.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
pub mod state;

pub use app::{build_app, build_state, build_store, run_server};
pub use error::ApiError;
pub use state::AppState;
