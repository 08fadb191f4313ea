//! JSON API handler modules and route assembly.

#[allow(clippy::missing_errors_doc)]
pub mod locations;

use axum::Router;
use axum::routing::{get, post};

use waypost_app::ports::{CellGeolocator, LocationRepository};

use crate::state::AppState;

/// Build the API sub-router.
///
/// Routes live at the root (no `/api` prefix); the wire contract predates
/// this implementation and is kept as-is.
pub fn routes<R, G>() -> Router<AppState<R, G>>
where
    R: LocationRepository + Send + Sync + 'static,
    G: CellGeolocator + Send + Sync + 'static,
{
    Router::new()
        .route("/update_location", post(locations::update::<R, G>))
        .route("/get_location/{device_id}", get(locations::get_latest::<R, G>))
        .route("/devices", get(locations::list_devices::<R, G>))
}
