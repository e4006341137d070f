//! MySQL repository implementations

pub mod location_repository_impl;

pub use location_repository_impl::MySqlLocationRepository;
