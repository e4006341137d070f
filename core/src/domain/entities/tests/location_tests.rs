//! Unit tests for location entity

use crate::domain::entities::location::Location;
use crate::errors::ValidationError;

#[test]
fn test_new_location_is_unsaved() {
    let location = Location::new(12.97, 77.59);
    assert_eq!(location.id, None);

    let stored = Location::with_id(7, 12.97, 77.59);
    assert_eq!(stored.id, Some(7));
}

#[test]
fn test_validate_accepts_bounds() {
    assert!(Location::new(90.0, 180.0).validate().is_ok());
    assert!(Location::new(-90.0, -180.0).validate().is_ok());
    assert!(Location::new(0.0, 0.0).validate().is_ok());
}

#[test]
fn test_validate_rejects_out_of_range_latitude() {
    let err = Location::new(90.5, 10.0).validate().unwrap_err();
    assert!(matches!(err, ValidationError::OutOfRange { ref field, .. } if field == "latitude"));
}

#[test]
fn test_validate_rejects_out_of_range_longitude() {
    let err = Location::new(10.0, -181.0).validate().unwrap_err();
    assert!(matches!(err, ValidationError::OutOfRange { ref field, .. } if field == "longitude"));
}

#[test]
fn test_validate_rejects_non_finite() {
    assert!(Location::new(f64::NAN, 0.0).validate().is_err());
    assert!(Location::new(0.0, f64::INFINITY).validate().is_err());
}

#[test]
fn test_validate_rejects_non_positive_id() {
    for id in [0, -1, i64::MIN] {
        let err = Location::with_id(id, 1.0, 2.0).validate().unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { ref field, .. } if field == "id"));
    }
    assert!(Location::with_id(1, 1.0, 2.0).validate().is_ok());
}
