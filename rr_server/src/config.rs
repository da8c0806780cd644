//! Server configuration management.
//!
//! Consolidates all environment variable reads and provides validated configuration.

use round_robin::db::DatabaseConfig;
use std::net::SocketAddr;

/// Complete server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server bind address
    pub bind: SocketAddr,
    /// Database configuration
    pub database: DatabaseConfig,
    /// Prometheus scrape address, metrics disabled when unset
    pub metrics_bind: Option<SocketAddr>,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Arguments
    ///
    /// * `bind_override` - Optional bind address override (from CLI args)
    /// * `database_url_override` - Optional database URL override (from CLI args)
    ///
    /// # Returns
    ///
    /// * `Result<ServerConfig, ConfigError>` - Loaded configuration or error
    ///
    /// # Errors
    ///
    /// Returns error if a set variable cannot be parsed
    pub fn from_env(
        bind_override: Option<SocketAddr>,
        database_url_override: Option<String>,
    ) -> Result<Self, ConfigError> {
        // Bind address
        let bind = bind_override
            .or_else(|| {
                std::env::var("SERVER_BIND")
                    .ok()
                    .and_then(|s| s.parse().ok())
            })
            .unwrap_or_else(|| {
                "127.0.0.1:3000"
                    .parse()
                    .expect("Default bind address is valid")
            });

        // Database configuration
        let database_url = database_url_override
            .or_else(|| std::env::var("DATABASE_URL").ok())
            .unwrap_or_else(|| "postgres://postgres@localhost/round_robin_db".to_string());

        let database = DatabaseConfig {
            database_url,
            max_connections: parse_env_or("DB_MAX_CONNECTIONS", 20),
            min_connections: parse_env_or("DB_MIN_CONNECTIONS", 5),
            connection_timeout_secs: parse_env_or("DB_CONNECTION_TIMEOUT", 10),
            idle_timeout_secs: parse_env_or("DB_IDLE_TIMEOUT", 600),
            max_lifetime_secs: parse_env_or("DB_MAX_LIFETIME", 1800),
        };

        // Metrics exporter is opt-in; a set but unparseable address is an
        // error rather than a silently disabled exporter
        let metrics_bind = match std::env::var("METRICS_BIND") {
            Ok(raw) => Some(raw.parse().map_err(|_| ConfigError::Invalid {
                var: "METRICS_BIND".to_string(),
                reason: format!("Not a valid socket address: {raw}"),
            })?),
            Err(_) => None,
        };

        Ok(ServerConfig {
            bind,
            database,
            metrics_bind,
        })
    }

    /// Validate configuration after loading
    ///
    /// # Returns
    ///
    /// * `Result<(), ConfigError>` - Success or validation error
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database.max_connections == 0 {
            return Err(ConfigError::Invalid {
                var: "DB_MAX_CONNECTIONS".to_string(),
                reason: "Must be greater than 0".to_string(),
            });
        }

        if self.database.min_connections > self.database.max_connections {
            return Err(ConfigError::Invalid {
                var: "DB_MIN_CONNECTIONS".to_string(),
                reason: format!(
                    "Cannot exceed max connections ({})",
                    self.database.max_connections
                ),
            });
        }

        if self.database.connection_timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                var: "DB_CONNECTION_TIMEOUT".to_string(),
                reason: "Must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },
}

/// Helper to parse environment variable with default fallback
fn parse_env_or<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_database(database: DatabaseConfig) -> ServerConfig {
        ServerConfig {
            bind: "127.0.0.1:3000".parse().unwrap(),
            database,
            metrics_bind: None,
        }
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Invalid {
            var: "METRICS_BIND".to_string(),
            reason: "Not a valid socket address: nope".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("METRICS_BIND"));
        assert!(msg.contains("nope"));
    }

    #[test]
    fn test_validation_accepts_development_defaults() {
        let config = config_with_database(DatabaseConfig::development());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_empty_pool() {
        let config = config_with_database(DatabaseConfig {
            database_url: "test".to_string(),
            max_connections: 0, // Invalid
            min_connections: 0,
            connection_timeout_secs: 10,
            idle_timeout_secs: 600,
            max_lifetime_secs: 1800,
        });

        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn test_validation_rejects_min_above_max() {
        let config = config_with_database(DatabaseConfig {
            database_url: "test".to_string(),
            max_connections: 5,
            min_connections: 10, // Invalid: more than max
            connection_timeout_secs: 10,
            idle_timeout_secs: 600,
            max_lifetime_secs: 1800,
        });

        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn test_validation_rejects_zero_timeout() {
        let config = config_with_database(DatabaseConfig {
            database_url: "test".to_string(),
            max_connections: 20,
            min_connections: 5,
            connection_timeout_secs: 0, // Invalid
            idle_timeout_secs: 600,
            max_lifetime_secs: 1800,
        });

        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }
}
