//! # AgriAlert Core
//!
//! Core domain layer for the AgriAlert backend: the `Location` entity and its
//! repository contract, the authenticated user snapshot, and the JWT token
//! service that issues and validates access tokens for it.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{Claims, Location, LocationClaim, UserRole, UserSnapshot};
pub use errors::{DomainError, DomainResult, TokenError, ValidationError};
pub use repositories::{InMemoryLocationRepository, LocationRepository};
pub use services::{Hs256KeyManager, TokenService, TokenServiceConfig};
