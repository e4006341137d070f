//! Location entity: a geocoordinate owned by whatever aggregate references it.

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Valid latitude range in degrees
pub const LATITUDE_RANGE: (f64, f64) = (-90.0, 90.0);

/// Valid longitude range in degrees
pub const LONGITUDE_RANGE: (f64, f64) = (-180.0, 180.0);

/// Smallest identifier a store assigns or accepts
pub const MIN_ID: i64 = 1;

/// A stored geocoordinate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Identifier assigned by the store; `None` until first saved
    pub id: Option<i64>,

    /// Latitude in degrees
    pub latitude: f64,

    /// Longitude in degrees
    pub longitude: f64,
}

impl Location {
    /// Creates a location that has not been stored yet
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            id: None,
            latitude,
            longitude,
        }
    }

    /// Creates a location with a known identifier
    pub fn with_id(id: i64, latitude: f64, longitude: f64) -> Self {
        Self {
            id: Some(id),
            latitude,
            longitude,
        }
    }

    /// Checks that a given id is positive and both coordinates are finite
    /// and within their ranges
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(id) = self.id {
            if id < MIN_ID {
                return Err(ValidationError::OutOfRange {
                    field: "id".to_string(),
                    min: MIN_ID.to_string(),
                    max: i64::MAX.to_string(),
                });
            }
        }
        check_range("latitude", self.latitude, LATITUDE_RANGE)?;
        check_range("longitude", self.longitude, LONGITUDE_RANGE)
    }
}

fn check_range(field: &str, value: f64, (min, max): (f64, f64)) -> Result<(), ValidationError> {
    if value.is_finite() && (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: min.to_string(),
            max: max.to_string(),
        })
    }
}
