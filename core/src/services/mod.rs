//! Business services containing domain logic.

pub mod token;

pub use token::{Hs256KeyManager, TokenService, TokenServiceConfig};
