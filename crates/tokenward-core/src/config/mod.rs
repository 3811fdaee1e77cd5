//! Application configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate from
//! TOML files and `TOKENWARD__*` environment variables. Each sub-module
//! represents a logical configuration section.

pub mod app;
pub mod auth;
pub mod database;
pub mod logging;
pub mod notifier;

use serde::{Deserialize, Serialize};

pub use self::app::ServerConfig;
pub use self::auth::{AuthConfig, RefreshHashConfig};
pub use self::database::{DatabaseConfig, StoreProvider};
pub use self::logging::LoggingConfig;
pub use self::notifier::{NotifierConfig, NotifierProvider};

use crate::error::AppError;

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Identity store settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Token and refresh-secret settings.
    pub auth: AuthConfig,
    /// Outbound warning delivery settings.
    #[serde(default)]
    pub notifier: NotifierConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files and the environment.
    ///
    /// Merges `config/default.toml`, an environment-specific overlay
    /// `config/{env}.toml`, and environment variables prefixed with
    /// `TOKENWARD__` (nested keys separated by `__`).
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("TOKENWARD")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let config: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        config.validate()?;
        Ok(config)
    }

    /// Check cross-field invariants that serde defaults cannot express.
    pub fn validate(&self) -> Result<(), AppError> {
        self.auth.validate()?;
        self.database.validate()?;
        self.notifier.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_toml(toml: &str) -> Result<AppConfig, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?;
        let parsed: AppConfig = config.try_deserialize()?;
        parsed.validate()?;
        Ok(parsed)
    }

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = from_toml(
            r#"
            [auth]
            jwt_secret = "s3cret"

            [database]
            provider = "memory"
            "#,
        )
        .expect("minimal config should load");

        assert_eq!(config.server.port, 8080);
        assert!(config.server.client_ip_header.is_none());
        assert_eq!(config.auth.access_ttl_minutes, 15);
        assert_eq!(config.auth.refresh_ttl_days, 30);
        assert_eq!(config.notifier.provider, NotifierProvider::Log);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_missing_secret_is_rejected() {
        let err = from_toml(
            r#"
            [auth]
            jwt_secret = ""

            [database]
            provider = "memory"
            "#,
        )
        .expect_err("empty secret must fail");
        assert_eq!(err.kind, crate::error::ErrorKind::Configuration);
    }

    #[test]
    fn test_non_positive_ttl_is_rejected() {
        let err = from_toml(
            r#"
            [auth]
            jwt_secret = "s3cret"
            access_ttl_minutes = 0

            [database]
            provider = "memory"
            "#,
        )
        .expect_err("zero ttl must fail");
        assert_eq!(err.kind, crate::error::ErrorKind::Configuration);
    }

    #[test]
    fn test_webhook_requires_url() {
        let err = from_toml(
            r#"
            [auth]
            jwt_secret = "s3cret"

            [database]
            provider = "memory"

            [notifier]
            provider = "webhook"
            "#,
        )
        .expect_err("webhook without url must fail");
        assert_eq!(err.kind, crate::error::ErrorKind::Configuration);
    }
}
