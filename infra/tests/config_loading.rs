//! Configuration layering through environment variables

use agri_infra::config::load_config_for;
use agri_shared::config::{Environment, LogFormat, SecretEncoding};

#[test]
fn test_environment_variables_override_defaults() {
    std::env::set_var("AGRI_JWT__SECRET", "ZmFybWVyLXNpZ25pbmcta2V5LWZvci1hZ3JpLWFsZXJ0IQ==");
    std::env::set_var("AGRI_JWT__SECRET_ENCODING", "base64");
    std::env::set_var("AGRI_JWT__ACCESS_TOKEN_EXPIRY", "900");
    std::env::set_var("AGRI_DATABASE__URL", "mysql://agri:agri@db:3306/agrialert");
    std::env::set_var("AGRI_DATABASE__MAX_CONNECTIONS", "25");
    std::env::set_var("AGRI_LOGGING__FORMAT", "compact");

    let config = load_config_for(Environment::Production).unwrap();

    assert_eq!(config.environment, Environment::Production);
    assert_eq!(config.jwt.secret_encoding, SecretEncoding::Base64);
    assert_eq!(config.jwt.access_token_expiry, 900);
    assert!(!config.jwt.allow_ephemeral_key);
    assert_eq!(config.database.url, "mysql://agri:agri@db:3306/agrialert");
    assert_eq!(config.database.max_connections, 25);
    assert_eq!(config.logging.format, LogFormat::Compact);
    assert_eq!(config.logging.level, "warn");

    // Ephemeral keys stay forbidden in production even when requested
    std::env::set_var("AGRI_JWT__ALLOW_EPHEMERAL_KEY", "true");
    assert!(load_config_for(Environment::Production).is_err());
}
