//! Application state shared across all handlers.

use std::sync::Arc;

use tokenward_core::config::AppConfig;
use tokenward_database::AccountStore;
use tokenward_service::SessionService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Identity store, shared with the session service and checked by `/health`.
    pub store: Arc<dyn AccountStore>,
    /// Session orchestration.
    pub session_service: Arc<SessionService>,
}

impl AppState {
    /// Creates the state from its parts.
    pub fn new(
        config: Arc<AppConfig>,
        store: Arc<dyn AccountStore>,
        session_service: Arc<SessionService>,
    ) -> Self {
        Self {
            config,
            store,
            session_service,
        }
    }
}
