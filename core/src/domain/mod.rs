//! Domain layer containing business entities.

pub mod entities;

pub use entities::{Claims, Location, LocationClaim, UserRole, UserSnapshot};
