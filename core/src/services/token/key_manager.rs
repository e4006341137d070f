//! HS256 key management for JWT signing and verification

use agri_shared::config::auth::MIN_SECRET_BYTES;
use agri_shared::config::{JwtConfig, SecretEncoding};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use jsonwebtoken::{DecodingKey, EncodingKey};
use rand::rngs::OsRng;
use rand::RngCore;

use crate::errors::{DomainError, TokenError};

/// Symmetric key material used for both signing and verification
///
/// The key is read-only after construction, so one manager can be shared
/// across threads.
#[derive(Clone)]
pub struct Hs256KeyManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ephemeral: bool,
}

impl std::fmt::Debug for Hs256KeyManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Hs256KeyManager")
            .field("ephemeral", &self.ephemeral)
            .finish_non_exhaustive()
    }
}

impl Hs256KeyManager {
    /// Creates a key manager from raw secret bytes
    ///
    /// # Returns
    ///
    /// * `Ok(Hs256KeyManager)` - Key manager initialized successfully
    /// * `Err(DomainError)` - Secret shorter than 256 bits
    pub fn from_secret(secret: &[u8]) -> Result<Self, DomainError> {
        if secret.len() < MIN_SECRET_BYTES {
            return Err(DomainError::Token(TokenError::KeyLoadError {
                message: format!(
                    "HS256 secret must be at least {} bytes, got {}",
                    MIN_SECRET_BYTES,
                    secret.len()
                ),
            }));
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            ephemeral: false,
        })
    }

    /// Creates a key manager from a standard base64 encoded secret
    pub fn from_base64(encoded: &str) -> Result<Self, DomainError> {
        let secret = STANDARD.decode(encoded.trim()).map_err(|e| {
            DomainError::Token(TokenError::KeyLoadError {
                message: format!("Invalid base64 secret: {}", e),
            })
        })?;

        Self::from_secret(&secret)
    }

    /// Generates a random key that lives only as long as this process
    ///
    /// Tokens signed with it cannot be verified after a restart or by any
    /// other instance.
    pub fn ephemeral() -> Self {
        let mut secret = [0u8; MIN_SECRET_BYTES];
        OsRng.fill_bytes(&mut secret);

        tracing::warn!(
            "Using a per-process JWT signing key; tokens will not survive a restart \
             and cannot be validated by other instances"
        );

        Self {
            encoding_key: EncodingKey::from_secret(&secret),
            decoding_key: DecodingKey::from_secret(&secret),
            ephemeral: true,
        }
    }

    /// Creates a key manager from the JWT configuration
    ///
    /// A configured secret always wins. Without one, an ephemeral key is
    /// generated only if the configuration explicitly allows it.
    pub fn from_config(config: &JwtConfig) -> Result<Self, DomainError> {
        if config.has_secret() {
            return match config.secret_encoding {
                SecretEncoding::Raw => Self::from_secret(config.secret.as_bytes()),
                SecretEncoding::Base64 => Self::from_base64(&config.secret),
            };
        }

        if config.allow_ephemeral_key {
            Ok(Self::ephemeral())
        } else {
            Err(DomainError::Token(TokenError::KeyLoadError {
                message: "no JWT secret configured and ephemeral keys are disabled".to_string(),
            }))
        }
    }

    /// Returns the encoding key for signing JWTs
    pub fn encoding_key(&self) -> &EncodingKey {
        &self.encoding_key
    }

    /// Returns the decoding key for verifying JWTs
    pub fn decoding_key(&self) -> &DecodingKey {
        &self.decoding_key
    }

    /// Whether the key was generated in-process
    pub fn is_ephemeral(&self) -> bool {
        self.ephemeral
    }
}
