//! JWT signing configuration

use serde::{Deserialize, Serialize};

/// Minimum length of an HS256 signing key in bytes (256 bits)
pub const MIN_SECRET_BYTES: usize = 32;

/// Longest accepted access token lifetime in seconds (366 days)
pub const MAX_ACCESS_TOKEN_EXPIRY: i64 = 366 * 24 * 60 * 60;

/// How `JwtConfig::secret` is encoded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SecretEncoding {
    /// The secret string's UTF-8 bytes are the key
    #[default]
    Raw,
    /// The secret string is standard base64 of the key bytes
    Base64,
}

/// JWT authentication configuration
#[derive(Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct JwtConfig {
    /// Shared HMAC secret; every process validating tokens needs the same one
    pub secret: String,

    /// Encoding of `secret`
    pub secret_encoding: SecretEncoding,

    /// Access token expiry time in seconds
    pub access_token_expiry: i64,

    /// Allow a random per-process key when no secret is configured.
    /// Tokens then stop validating after a restart or on any other instance.
    pub allow_ephemeral_key: bool,
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &if self.secret.is_empty() { "<unset>" } else { "<redacted>" })
            .field("secret_encoding", &self.secret_encoding)
            .field("access_token_expiry", &self.access_token_expiry)
            .field("allow_ephemeral_key", &self.allow_ephemeral_key)
            .finish()
    }
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::new(),
            secret_encoding: SecretEncoding::Raw,
            access_token_expiry: 3600, // 1 hour
            allow_ephemeral_key: false,
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with a raw secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Create a new JWT configuration with a base64 encoded secret
    pub fn from_base64(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            secret_encoding: SecretEncoding::Base64,
            ..Default::default()
        }
    }

    /// Set access token expiry in minutes
    pub fn with_access_expiry_minutes(mut self, minutes: i64) -> Self {
        self.access_token_expiry = minutes.saturating_mul(60);
        self
    }

    /// Permit falling back to a per-process random key
    pub fn with_ephemeral_key(mut self, allow: bool) -> Self {
        self.allow_ephemeral_key = allow;
        self
    }

    /// Whether a secret has been configured
    pub fn has_secret(&self) -> bool {
        !self.secret.is_empty()
    }

    /// Check the settings that do not need key decoding
    pub fn validate(&self) -> Result<(), String> {
        if !(1..=MAX_ACCESS_TOKEN_EXPIRY).contains(&self.access_token_expiry) {
            return Err(format!(
                "access token expiry must be between 1 and {} seconds",
                MAX_ACCESS_TOKEN_EXPIRY
            ));
        }
        if !self.has_secret() && !self.allow_ephemeral_key {
            return Err("JWT secret is required unless ephemeral keys are allowed".to_string());
        }
        if self.secret_encoding == SecretEncoding::Raw
            && self.has_secret()
            && self.secret.len() < MIN_SECRET_BYTES
        {
            return Err(format!("JWT secret must be at least {} bytes", MIN_SECRET_BYTES));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jwt_config_default() {
        let config = JwtConfig::default();
        assert_eq!(config.access_token_expiry, 3600);
        assert_eq!(config.secret_encoding, SecretEncoding::Raw);
        assert!(!config.has_secret());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_jwt_config_builder() {
        let config = JwtConfig::new("0123456789abcdef0123456789abcdef")
            .with_access_expiry_minutes(30);

        assert_eq!(config.access_token_expiry, 1800);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_short_raw_secret_rejected() {
        let config = JwtConfig::new("too-short");
        assert!(config.validate().unwrap_err().contains("32 bytes"));
    }

    #[test]
    fn test_ephemeral_without_secret() {
        let config = JwtConfig::default().with_ephemeral_key(true);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = JwtConfig::new("0123456789abcdef0123456789abcdef");
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("0123456789abcdef"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn test_access_expiry_bounds() {
        let mut config = JwtConfig::new("0123456789abcdef0123456789abcdef");

        config.access_token_expiry = MAX_ACCESS_TOKEN_EXPIRY;
        assert!(config.validate().is_ok());

        config.access_token_expiry = MAX_ACCESS_TOKEN_EXPIRY + 1;
        assert!(config.validate().is_err());

        config.access_token_expiry = 0;
        assert!(config.validate().is_err());

        let huge = config.with_access_expiry_minutes(i64::MAX);
        assert_eq!(huge.access_token_expiry, i64::MAX);
        assert!(huge.validate().is_err());
    }
}
