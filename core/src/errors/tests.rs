//! Unit tests for domain error types

use jsonwebtoken::errors::{Error as JwtError, ErrorKind};

use super::{DomainError, TokenError, ValidationError};

#[test]
fn test_token_error_messages() {
    assert_eq!(TokenError::InvalidSignature.to_string(), "Token signature verification failed");
    let err = TokenError::KeyLoadError {
        message: "secret too short".to_string(),
    };
    assert!(err.to_string().contains("secret too short"));
}

#[test]
fn test_domain_error_is_transparent() {
    let err: DomainError = TokenError::InvalidTokenFormat.into();
    assert_eq!(err.to_string(), "Invalid token format");

    let err: DomainError = ValidationError::OutOfRange {
        field: "latitude".to_string(),
        min: "-90".to_string(),
        max: "90".to_string(),
    }
    .into();
    assert_eq!(err.to_string(), "Out of range: latitude (min: -90, max: 90)");
}

#[test]
fn test_not_found_helper() {
    let err = DomainError::not_found("Location");
    assert!(matches!(err, DomainError::NotFound { ref resource } if resource == "Location"));
    assert_eq!(err.to_string(), "Resource not found: Location");
}

#[test]
fn test_jwt_error_mapping() {
    let sig: TokenError = JwtError::from(ErrorKind::InvalidSignature).into();
    assert_eq!(sig, TokenError::InvalidSignature);

    let claim: TokenError =
        JwtError::from(ErrorKind::MissingRequiredClaim("exp".to_string())).into();
    assert_eq!(claim, TokenError::InvalidClaims);

    let format: TokenError = JwtError::from(ErrorKind::InvalidToken).into();
    assert_eq!(format, TokenError::InvalidTokenFormat);
}
