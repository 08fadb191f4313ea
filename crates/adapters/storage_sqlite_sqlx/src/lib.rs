//! # waypost-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the [`LocationRepository`](waypost_app::ports::LocationRepository)
//!   port defined in `waypost-app`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `waypost-app` (for port traits) and `waypost-domain` (for domain
//! types). The `app` and `domain` crates must never reference this adapter.

pub mod error;
pub mod location_repo;
pub mod pool;

pub use error::StorageError;
pub use location_repo::SqliteLocationRepository;
pub use pool::{Config, Database};
