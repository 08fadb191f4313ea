//! # waypost-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `LocationRepository` — append-only store of location records
//!   - `CellGeolocator` — resolve a cell tower descriptor into coordinates
//! - Define the **driving/inbound port** as a use-case struct:
//!   - `LocationService` — submit reports, read latest fixes, list devices
//! - Orchestrate domain objects without knowing *how* persistence or IO works
//!
//! ## Dependency rule
//! Depends on `waypost-domain` only. Never imports adapter crates.
//! Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
