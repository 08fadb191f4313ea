//! Geolocation port — outbound resolution of cell towers into coordinates.

use std::future::Future;

use waypost_domain::error::UpstreamError;
use waypost_domain::report::CellTower;

/// Coordinates returned by the geolocation provider for a tower lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct CellFix {
    pub lat: f64,
    pub lng: f64,
    /// Estimated accuracy radius in meters; absent when the provider omits it.
    pub accuracy: Option<f64>,
}

/// Resolves a single cell tower into coordinates via an external provider.
///
/// One outbound call per invocation, bounded by the adapter's configured
/// timeout. No retries, no caching, no fallback: any provider failure
/// surfaces as an [`UpstreamError`].
pub trait CellGeolocator {
    /// Look up the coordinates for `tower`.
    fn locate(
        &self,
        tower: &CellTower,
    ) -> impl Future<Output = Result<CellFix, UpstreamError>> + Send;
}
