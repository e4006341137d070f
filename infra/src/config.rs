//! Configuration loading for infrastructure services
//!
//! Sources, lowest precedence first:
//! - built-in defaults (`AppConfig` serde defaults, per-environment logging,
//!   ephemeral signing key permitted in development only)
//! - `config.<environment>.toml` in the working directory, if present
//! - `AGRI_` prefixed environment variables, `__` separating nested keys
//!   (e.g. `AGRI_JWT__SECRET`, `AGRI_DATABASE__URL`)

use agri_shared::config::{AppConfig, Environment, LoggingConfig};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment as EnvSource, File};

use crate::InfrastructureError;

/// Prefix for environment overrides
pub const ENV_PREFIX: &str = "AGRI";

/// Load configuration for the environment named by `ENVIRONMENT`
pub fn load_config() -> Result<AppConfig, InfrastructureError> {
    dotenvy::dotenv().ok(); // Load .env file if present

    load_config_for(Environment::from_env())
}

/// Load and validate configuration for a specific environment
pub fn load_config_for(environment: Environment) -> Result<AppConfig, InfrastructureError> {
    let builder = defaults(environment).map(|builder| {
        builder
            .add_source(File::with_name(environment.config_file()).required(false))
            .add_source(
                EnvSource::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
    });

    finish(environment, builder)
}

fn defaults(environment: Environment) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let logging = LoggingConfig::for_environment(environment);

    Config::builder()
        .set_default("logging.level", logging.level)?
        .set_default("logging.format", logging.format.as_str())?
        .set_default("logging.colored", logging.colored)?
        .set_default("logging.source_location", logging.source_location)?
        .set_default("jwt.allow_ephemeral_key", environment.is_development())
}

fn finish(
    environment: Environment,
    builder: Result<ConfigBuilder<DefaultState>, ConfigError>,
) -> Result<AppConfig, InfrastructureError> {
    let config: AppConfig = builder
        .and_then(|b| b.set_override("environment", environment.to_string()))
        .and_then(|b| b.build())
        .and_then(|c| c.try_deserialize())
        .map_err(|e| InfrastructureError::Config(e.to_string()))?;

    config
        .validate()
        .map_err(InfrastructureError::Config)?;

    tracing::debug!(
        environment = %config.environment,
        ephemeral_key = config.jwt.allow_ephemeral_key && !config.jwt.has_secret(),
        "Configuration loaded"
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Built from defaults only so the host's files and AGRI_* variables
    // cannot leak in; layering is covered by tests/config_loading.rs

    #[test]
    fn test_development_defaults_allow_ephemeral_key() {
        let config = finish(Environment::Development, defaults(Environment::Development)).unwrap();

        assert_eq!(config.environment, Environment::Development);
        assert!(config.jwt.allow_ephemeral_key);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_staging_requires_secret() {
        let result = finish(Environment::Staging, defaults(Environment::Staging));
        assert!(matches!(result, Err(InfrastructureError::Config(_))));
    }
}
