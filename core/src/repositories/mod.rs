pub mod location;

pub use location::{InMemoryLocationRepository, LocationRepository};
