//! Application builder: wires state, router, and middleware into an Axum app.

use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tokio::sync::watch;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use tokenward_auth::{RefreshHasher, TokenManager};
use tokenward_core::config::{AppConfig, StoreProvider};
use tokenward_core::error::{AppError, ErrorKind};
use tokenward_core::traits::Notifier;
use tokenward_database::migration::run_migrations;
use tokenward_database::connection::connect;
use tokenward_database::{AccountStore, MemoryAccountStore, PgAccountStore};
use tokenward_service::{SessionService, build_notifier};

use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    build_router(state).layer(TraceLayer::new_for_http())
}

/// Builds the application state around an already-constructed store and
/// notifier.
pub fn build_state(
    config: AppConfig,
    store: Arc<dyn AccountStore>,
    notifier: Arc<dyn Notifier>,
) -> Result<AppState, AppError> {
    let tokens = Arc::new(TokenManager::from_config(&config.auth)?);
    let hasher = Arc::new(RefreshHasher::new(&config.auth.refresh_hash)?);
    let session_service = Arc::new(SessionService::new(
        store.clone(),
        tokens,
        hasher,
        notifier,
    ));

    Ok(AppState::new(Arc::new(config), store, session_service))
}

/// Opens the identity store selected by `config.database.provider`.
pub async fn build_store(config: &AppConfig) -> Result<Arc<dyn AccountStore>, AppError> {
    match config.database.provider {
        StoreProvider::Postgres => {
            let pool = connect(&config.database).await?;
            run_migrations(&pool).await?;
            Ok(Arc::new(PgAccountStore::new(pool)))
        }
        StoreProvider::Memory => {
            warn!("Using the in-memory account store; accounts are lost on restart");
            Ok(Arc::new(MemoryAccountStore::new()))
        }
    }
}

/// Runs the Tokenward server until Ctrl+C.
pub async fn run_server(config: AppConfig) -> Result<(), AppError> {
    info!("Starting Tokenward server...");

    let store = build_store(&config).await?;
    let notifier = build_notifier(&config.notifier)?;
    info!(provider = ?config.notifier.provider, "Notifier initialized");

    let addr = config.server.bind_address();
    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);
    let app = build_app(build_state(config, store, notifier)?);

    let listener = tokio::net::TcpListener::bind(&addr).await.map_err(|e| {
        AppError::with_source(ErrorKind::Internal, format!("Failed to bind {addr}"), e)
    })?;

    info!("Tokenward server listening on {}", addr);

    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
    let server = axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(async move {
        shutdown_signal().await;
        let _ = shutdown_tx.send(true);
    })
    .into_future();

    let deadline = async move {
        let _ = shutdown_rx.changed().await;
        tokio::time::sleep(grace).await;
    };

    tokio::select! {
        result = server => {
            result.map_err(|e| AppError::with_source(ErrorKind::Internal, "Server error", e))?;
        }
        () = deadline => {
            warn!(grace_seconds = grace.as_secs(), "Shutdown grace period elapsed, exiting");
        }
    }

    info!("Tokenward server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
