//! Route definitions for the Tokenward HTTP API.
//!
//! Auth and account routes are mounted under `/api`; `/health` sits at the
//! root.

use axum::{
    Router,
    routing::{get, post},
};

use crate::handlers;
use crate::state::AppState;

/// Build the router with all routes and the given state.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(account_routes());

    Router::new()
        .nest("/api", api_routes)
        .route("/health", get(handlers::health::health))
        .with_state(state)
}

/// Session endpoints: sign-up, sign-in, refresh
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/sign-up", post(handlers::auth::sign_up))
        .route("/auth/sign-in", post(handlers::auth::sign_in))
        .route("/auth/refresh", post(handlers::auth::refresh))
}

/// Account listing
fn account_routes() -> Router<AppState> {
    Router::new().route("/accounts", get(handlers::account::list_accounts))
}
