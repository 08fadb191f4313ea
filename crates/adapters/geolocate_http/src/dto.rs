//! Wire types for the Google Geolocation API.
//!
//! Request and response shapes follow the provider's documented JSON, which
//! is camelCase on the wire. The response is decoded into the port-level
//! [`CellFix`](waypost_app::ports::CellFix) by the client, so nothing here
//! leaks beyond this adapter.

use serde::{Deserialize, Serialize};

use waypost_domain::report::CellTower;

/// Provider request body: a single-cell-tower geolocation query.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeolocateRequest {
    pub cell_towers: Vec<CellTowerDto>,
}

impl From<&CellTower> for GeolocateRequest {
    fn from(tower: &CellTower) -> Self {
        Self {
            cell_towers: vec![CellTowerDto {
                cell_id: tower.cid,
                location_area_code: tower.lac,
                mobile_country_code: tower.mcc,
                mobile_network_code: tower.mnc,
                signal_strength: tower.signal,
            }],
        }
    }
}

/// One tower entry in a [`GeolocateRequest`].
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CellTowerDto {
    pub cell_id: u64,
    pub location_area_code: u32,
    pub mobile_country_code: u16,
    pub mobile_network_code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signal_strength: Option<i32>,
}

/// Provider success response.
#[derive(Debug, Deserialize)]
pub struct GeolocateResponse {
    pub location: GeolocateCoordinates,
    /// Estimated accuracy radius in meters; the provider may omit it.
    #[serde(default)]
    pub accuracy: Option<f64>,
}

/// The `location` object of a [`GeolocateResponse`].
#[derive(Debug, Deserialize)]
pub struct GeolocateCoordinates {
    pub lat: f64,
    pub lng: f64,
}
