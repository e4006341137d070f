//! Token service module for JWT management
//!
//! This module handles:
//! - HS256 access token issuance for an authenticated user snapshot
//! - Token parsing, identity and expiry validation
//! - Signing key management (configured shared secret or per-process key)

mod config;
mod key_manager;
mod service;

#[cfg(test)]
mod tests;

pub use config::TokenServiceConfig;
pub use key_manager::Hs256KeyManager;
pub use service::TokenService;
