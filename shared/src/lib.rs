//! Shared configuration and common types for the AgriAlert server
//!
//! This crate provides functionality used across the server crates:
//! - Configuration types (JWT, database, environment, logging)
//! - Pagination types for list operations

pub mod config;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, DatabaseConfig, Environment, JwtConfig, LogFormat, LoggingConfig, SecretEncoding,
};
pub use types::{PaginatedResponse, Pagination};
