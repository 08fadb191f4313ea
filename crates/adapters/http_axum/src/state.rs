//! Shared application state for axum handlers.

use std::sync::Arc;

use waypost_app::ports::{CellGeolocator, LocationRepository};
use waypost_app::services::LocationService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository and geolocator types to avoid dynamic
/// dispatch. `Clone` is implemented manually so the underlying types
/// themselves do not need to be `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<R, G> {
    /// Location ingestion and read service.
    pub location_service: Arc<LocationService<R, G>>,
}

impl<R, G> Clone for AppState<R, G> {
    fn clone(&self) -> Self {
        Self {
            location_service: Arc::clone(&self.location_service),
        }
    }
}

impl<R, G> AppState<R, G>
where
    R: LocationRepository + Send + Sync + 'static,
    G: CellGeolocator + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(location_service: LocationService<R, G>) -> Self {
        Self {
            location_service: Arc::new(location_service),
        }
    }

    /// Create a new application state from a pre-wrapped `Arc` service.
    ///
    /// Use this when the service needs to be shared with background tasks
    /// before constructing the HTTP state.
    pub fn from_arc(location_service: Arc<LocationService<R, G>>) -> Self {
        Self { location_service }
    }
}
