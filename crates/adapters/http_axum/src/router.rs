//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use waypost_app::ports::{CellGeolocator, LocationRepository};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Merges the JSON API and the landing page at the root. Includes a
/// [`TraceLayer`] that logs each HTTP request/response at the `DEBUG` level
/// using the `tracing` ecosystem.
pub fn build<R, G>(state: AppState<R, G>) -> Router
where
    R: LocationRepository + Send + Sync + 'static,
    G: CellGeolocator + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .merge(crate::api::routes())
        .merge(crate::landing::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
