//! Application configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate from
//! optional TOML files and `DOCREPO__`-prefixed environment variables.
//! Every field carries a serde default, so an empty source yields a
//! working in-memory setup.

pub mod database;
pub mod logging;
pub mod repository;
pub mod store;

use serde::{Deserialize, Serialize};

pub use self::database::DatabaseConfig;
pub use self::logging::LoggingConfig;
pub use self::repository::RepositoryConfig;
pub use self::store::StoreConfig;

use crate::error::AppError;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Document store provider selection.
    #[serde(default)]
    pub store: StoreConfig,
    /// PostgreSQL connection settings (used by the `postgres` provider).
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Repository behaviour settings.
    #[serde(default)]
    pub repository: RepositoryConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files and the environment.
    ///
    /// Merges `config/default`, an environment-specific overlay
    /// `config/{env}`, and environment variables prefixed with `DOCREPO`
    /// (nested keys separated by `__`, e.g. `DOCREPO__STORE__PROVIDER`).
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("DOCREPO")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }

    /// Load configuration from a single TOML string.
    pub fn from_toml(source: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_source_uses_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config.store.provider, "memory");
        assert_eq!(config.repository.page_size, 50);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.database.max_connections, 20);
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = AppConfig::from_toml(
            r#"
            [store]
            provider = "postgres"

            [repository]
            page_size = 10

            [logging]
            format = "pretty"
            "#,
        )
        .unwrap();
        assert_eq!(config.store.provider, "postgres");
        assert_eq!(config.repository.page_size, 10);
        assert_eq!(config.logging.format, "pretty");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_invalid_type_is_configuration_error() {
        let err = AppConfig::from_toml("[repository]\npage_size = \"many\"").unwrap_err();
        assert_eq!(err.kind, crate::error::ErrorKind::Configuration);
    }
}
