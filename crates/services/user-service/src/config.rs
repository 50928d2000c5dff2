//! User service configuration.

use std::env;

use common::DatabaseConfig;

/// User service configuration.
#[derive(Debug, Clone, Default)]
pub struct UserServiceConfig {
    /// Relational store holding `APP_USER`
    pub database: DatabaseConfig,
}

impl UserServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = DatabaseConfig::default();

        Self {
            database: DatabaseConfig {
                url: env::var("USER_SERVICE_DATABASE_URL")
                    .or_else(|_| env::var("DATABASE_URL"))
                    .unwrap_or(defaults.url),
                max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.max_connections),
                min_connections: env::var("DATABASE_MIN_CONNECTIONS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.min_connections),
                sql_logging: env::var("DATABASE_SQL_LOGGING")
                    .map(|v| v == "true" || v == "1")
                    .unwrap_or(defaults.sql_logging),
            },
        }
    }
}
