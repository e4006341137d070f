//! Tests for domain entities

mod location_tests;
