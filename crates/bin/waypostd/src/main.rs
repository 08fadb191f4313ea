//! # waypostd — waypost daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (TOML file, env vars)
//! - Initialize the `SQLite` connection pool and run migrations
//! - Construct the repository and geolocator implementations (adapters)
//! - Construct the application service, injecting adapters via port traits
//! - Build the axum router, injecting the application service
//! - Bind to a TCP port and serve until SIGINT
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use tracing_subscriber::EnvFilter;

use waypost_adapter_geolocate_http::GoogleGeolocator;
use waypost_adapter_http_axum::state::AppState;
use waypost_adapter_storage_sqlite_sqlx::{Config as DbConfig, SqliteLocationRepository};
use waypost_app::services::LocationService;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    if config.geolocation.api_key.is_empty() {
        tracing::warn!("no geolocation API key configured; cell-tower reports will fail upstream");
    }

    // Database
    let db = DbConfig {
        database_url: config.database_url().to_string(),
    }
    .build()
    .await?;

    // Adapters
    let location_repo = SqliteLocationRepository::new(db.pool().clone());
    let geolocator = GoogleGeolocator::new(&config.geolocation)?;

    // Service
    let location_service = LocationService::new(location_repo, geolocator);

    // HTTP
    let state = AppState::new(location_service);
    let app = waypost_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    tracing::info!(addr = %bind_addr, "waypostd listening");

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
}
