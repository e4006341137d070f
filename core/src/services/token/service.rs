//! Main token service implementation

use agri_shared::config::auth::MAX_ACCESS_TOKEN_EXPIRY;
use agri_shared::config::JwtConfig;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, Header, Validation};

use crate::domain::entities::token::Claims;
use crate::domain::entities::user::UserSnapshot;
use crate::errors::{DomainError, TokenError};

use super::config::TokenServiceConfig;
use super::key_manager::Hs256KeyManager;

/// Service for issuing and validating HS256 access tokens
///
/// Stateless apart from the read-only key, so it can be shared behind an
/// `Arc` by concurrent request handlers.
#[derive(Debug)]
pub struct TokenService {
    config: TokenServiceConfig,
    keys: Hs256KeyManager,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    ///
    /// # Arguments
    ///
    /// * `config` - Token service configuration
    /// * `keys` - Signing key shared by every process that validates tokens
    pub fn new(config: TokenServiceConfig, keys: Hs256KeyManager) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is reported as a validation result, not a decoding error
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            config,
            keys,
            validation,
        }
    }

    /// Creates a token service from the JWT section of the app configuration
    ///
    /// # Returns
    ///
    /// * `Ok(TokenService)` - Service ready to issue tokens
    /// * `Err(DomainError)` - Invalid expiry or key could not be loaded
    pub fn from_jwt_config(config: &JwtConfig) -> Result<Self, DomainError> {
        if !(1..=MAX_ACCESS_TOKEN_EXPIRY).contains(&config.access_token_expiry) {
            return Err(DomainError::Validation {
                message: format!(
                    "access token expiry must be between 1 and {} seconds",
                    MAX_ACCESS_TOKEN_EXPIRY
                ),
            });
        }
        let keys = Hs256KeyManager::from_config(config)?;
        Ok(Self::new(TokenServiceConfig::from(config), keys))
    }

    /// Lifetime of newly issued tokens, `None` if the configured seconds
    /// do not fit a duration
    pub fn access_token_expiry(&self) -> Option<Duration> {
        self.config.access_token_expiry()
    }

    /// Whether tokens are signed with a per-process key
    pub fn uses_ephemeral_key(&self) -> bool {
        self.keys.is_ephemeral()
    }

    /// Issues a signed token for the given user
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - Compact `header.payload.signature` token
    /// * `Err(DomainError)` - Token generation failed, including an expiry
    ///   past the representable time range
    pub fn generate_token(&self, user: &UserSnapshot) -> Result<String, DomainError> {
        self.generate_token_at(user, Utc::now())
    }

    /// Issues a signed token as if the current time were `issued_at`
    pub fn generate_token_at(
        &self,
        user: &UserSnapshot,
        issued_at: DateTime<Utc>,
    ) -> Result<String, DomainError> {
        let validity = self
            .access_token_expiry()
            .ok_or(TokenError::TokenGenerationFailed)?;
        let claims = Claims::for_user(user, issued_at, validity).map_err(|e| {
            tracing::error!("Token expiry out of range: {}", e);
            e
        })?;
        let token = self.encode_jwt(&claims)?;

        tracing::debug!(
            role = %user.role,
            has_location = claims.location.is_some(),
            expires_at = claims.exp,
            "Issued access token"
        );
        Ok(token)
    }

    /// Encodes claims into a JWT
    fn encode_jwt(&self, claims: &Claims) -> Result<String, DomainError> {
        let header = Header::new(Algorithm::HS256);
        encode(&header, claims, self.keys.encoding_key()).map_err(|e| {
            tracing::error!("Failed to sign token: {}", e);
            DomainError::Token(TokenError::TokenGenerationFailed)
        })
    }

    /// Verifies the signature and returns the claims
    ///
    /// Expired tokens still decode; use `validate_token` for the expiry check.
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - The decoded claims
    /// * `Err(DomainError)` - Token is malformed or its signature does not verify
    pub fn extract_claims(&self, token: &str) -> Result<Claims, DomainError> {
        let token_data = decode::<Claims>(token, self.keys.decoding_key(), &self.validation)
            .map_err(|e| DomainError::Token(TokenError::from(e)))?;
        Ok(token_data.claims)
    }

    /// Extracts the username (subject) from a verified token
    pub fn extract_username(&self, token: &str) -> Result<String, DomainError> {
        Ok(self.extract_claims(token)?.sub)
    }

    /// Extracts the expiration timestamp from a verified token
    pub fn extract_expiration(&self, token: &str) -> Result<DateTime<Utc>, DomainError> {
        self.extract_claims(token)?
            .expires_at()
            .ok_or(DomainError::Token(TokenError::InvalidClaims))
    }

    /// Checks whether a verified token has expired
    pub fn is_token_expired(&self, token: &str) -> Result<bool, DomainError> {
        Ok(self.extract_claims(token)?.is_expired())
    }

    /// Validates a token against the expected identity and the current time
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - Subject matches and the token has not expired
    /// * `Ok(false)` - Subject differs or the token has expired
    /// * `Err(DomainError)` - Token is malformed or its signature does not verify
    pub fn validate_token(&self, token: &str, expected_username: &str) -> Result<bool, DomainError> {
        self.validate_token_at(token, expected_username, Utc::now())
    }

    /// Validates a token as if the current time were `now`
    pub fn validate_token_at(
        &self,
        token: &str,
        expected_username: &str,
        now: DateTime<Utc>,
    ) -> Result<bool, DomainError> {
        let claims = self.extract_claims(token)?;

        if claims.sub != expected_username {
            tracing::warn!("Token subject does not match the expected user");
            return Ok(false);
        }
        if claims.is_expired_at(now) {
            tracing::debug!(expired_at = claims.exp, "Token has expired");
            return Ok(false);
        }
        Ok(true)
    }
}
