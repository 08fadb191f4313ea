//! # waypost-domain
//!
//! Pure domain model for the waypost location tracking service.
//!
//! ## Responsibilities
//! - Foundational types: device identifiers, record identifiers, timestamps,
//!   error conventions
//! - Define **location reports** (what a device sends: GPS reading or
//!   cell-tower descriptor)
//! - Define **resolved locations** (coordinates produced by the resolution
//!   step, not yet persisted)
//! - Define **location records** (immutable persisted observations)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod device;
pub mod error;
pub mod location;
pub mod report;
pub mod time;
