//! PostgreSQL pool construction.

use std::str::FromStr;
use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use tracing::info;

use tokenward_core::config::DatabaseConfig;
use tokenward_core::error::{AppError, ErrorKind};

/// Parse `database.url` into connect options.
///
/// A URL that does not parse is a configuration error, not a store failure.
pub fn connect_options(config: &DatabaseConfig) -> Result<PgConnectOptions, AppError> {
    PgConnectOptions::from_str(&config.url).map_err(|e| {
        AppError::with_source(ErrorKind::Configuration, "Invalid database.url", e)
    })
}

/// Open a pool sized and timed by `config`.
///
/// Only the host, port and database name are logged; credentials never
/// leave the parsed options.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, AppError> {
    let options = connect_options(config)?;

    info!(
        host = options.get_host(),
        port = options.get_port(),
        database = options.get_database().unwrap_or_default(),
        max_connections = config.max_connections,
        "Connecting to PostgreSQL"
    );

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout_seconds))
        .idle_timeout(Duration::from_secs(config.idle_timeout_seconds))
        .connect_with(options)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Store, "Failed to connect to database", e))?;

    info!("Connected to PostgreSQL");
    Ok(pool)
}
