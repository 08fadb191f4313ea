//! Application services — one struct per use-case family.

pub mod location_service;

pub use location_service::LocationService;
