//! # waypost-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **location report API**: ingest reports, read a device's
//!   latest location, list known devices
//! - Serve a small static **landing page** at `/`
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into the wire-level JSON bodies
//!
//! ## Dependency rule
//! Depends on `waypost-app` (for port traits and the service) and
//! `waypost-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod landing;
pub mod router;
pub mod state;
