//! Domain entities representing core business objects.

pub mod location;
pub mod token;
pub mod user;

#[cfg(test)]
mod tests;

pub use location::{Location, LATITUDE_RANGE, LONGITUDE_RANGE, MIN_ID};
pub use token::{Claims, LocationClaim, ACCESS_TOKEN_EXPIRY_MINUTES};
pub use user::{UserRole, UserSnapshot};
