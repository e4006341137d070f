//! Configuration for the token service

use agri_shared::config::JwtConfig;
use chrono::Duration;

use crate::domain::entities::token::ACCESS_TOKEN_EXPIRY_MINUTES;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// Access token lifetime in seconds
    pub access_token_expiry_seconds: i64,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            access_token_expiry_seconds: ACCESS_TOKEN_EXPIRY_MINUTES * 60,
        }
    }
}

impl TokenServiceConfig {
    /// Token lifetime as a duration, `None` if it does not fit one
    pub fn access_token_expiry(&self) -> Option<Duration> {
        Duration::try_seconds(self.access_token_expiry_seconds)
    }
}

impl From<&JwtConfig> for TokenServiceConfig {
    fn from(config: &JwtConfig) -> Self {
        Self {
            access_token_expiry_seconds: config.access_token_expiry,
        }
    }
}
