//! Configuration module with business-specific sub-modules
//!
//! - `auth` - JWT signing key and token lifetime
//! - `database` - Database connection and pool configuration
//! - `environment` - Environment detection and logging configuration

pub mod auth;
pub mod database;
pub mod environment;

use serde::{Deserialize, Serialize};

pub use auth::{JwtConfig, SecretEncoding};
pub use database::DatabaseConfig;
pub use environment::{Environment, LogFormat, LoggingConfig};

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Database configuration
    pub database: DatabaseConfig,

    /// JWT configuration
    pub jwt: JwtConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            database: DatabaseConfig::default(),
            jwt: JwtConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Create configuration for development environment
    pub fn development() -> Self {
        Self {
            environment: Environment::Development,
            database: DatabaseConfig::new("mysql://localhost:3306/agrialert_dev"),
            jwt: JwtConfig::default().with_ephemeral_key(true),
            logging: LoggingConfig::for_environment(Environment::Development),
        }
    }

    /// Create configuration for production environment
    ///
    /// The signing secret is left empty; production must inject it.
    pub fn production() -> Self {
        Self {
            environment: Environment::Production,
            database: DatabaseConfig::new("mysql://prod-db:3306/agrialert").with_max_connections(50),
            jwt: JwtConfig::default(),
            logging: LoggingConfig::for_environment(Environment::Production),
        }
    }

    /// Check cross-field constraints before the configuration is used
    pub fn validate(&self) -> Result<(), String> {
        self.jwt.validate()?;
        if self.environment.is_production() && self.jwt.allow_ephemeral_key {
            return Err("ephemeral JWT signing keys are not allowed in production".to_string());
        }
        if self.database.url.is_empty() {
            return Err("database url must not be empty".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_development_allows_ephemeral_key() {
        let config = AppConfig::development();
        assert!(config.jwt.allow_ephemeral_key);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_production_requires_injected_secret() {
        let config = AppConfig::production();
        assert!(config.validate().is_err());

        let mut config = AppConfig::production();
        config.jwt = JwtConfig::new("0123456789abcdef0123456789abcdef");
        assert!(config.validate().is_ok());

        config.jwt.allow_ephemeral_key = true;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let json = r#"{ "jwt": { "secret": "0123456789abcdef0123456789abcdef" } }"#;
        let config: AppConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.jwt.access_token_expiry, 3600);
        assert_eq!(config.database.max_connections, 10);
        assert_eq!(config.environment, Environment::Development);
    }
}
