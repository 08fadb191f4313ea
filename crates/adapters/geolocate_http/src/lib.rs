//! # waypost-adapter-geolocate-http
//!
//! Outbound adapter for the Google Geolocation API, built on
//! [reqwest](https://docs.rs/reqwest).
//!
//! ## Responsibilities
//! - Implement the [`CellGeolocator`](waypost_app::ports::CellGeolocator) port
//! - Own transport details only: request serialisation, the bounded timeout,
//!   HTTP status mapping, and JSON decoding into a [`CellFix`]
//!
//! No retries, no caching of provider responses, no rate limiting toward the
//! provider: one outbound call per invocation, exactly as the service asks.
//!
//! ## Dependency rule
//! Depends on `waypost-app` (for the port trait) and `waypost-domain` (for
//! tower and error types). Never referenced by `app` or `domain`.
//!
//! [`CellFix`]: waypost_app::ports::CellFix

pub mod client;
pub mod config;
pub mod dto;

pub use client::GoogleGeolocator;
pub use config::GeolocateConfig;
