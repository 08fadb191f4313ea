//! JSON handlers for location reports and lookups.

use axum::Json;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};

use waypost_app::ports::{CellGeolocator, LocationRepository};
use waypost_domain::device::DeviceId;
use waypost_domain::error::{InvalidInputError, WaypostError};
use waypost_domain::location::{LocationRecord, LocationSource};
use waypost_domain::report::{CellTower, LocationReport};

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for `POST /update_location`.
///
/// Loosely structured on purpose: which fields are present decides the
/// resolution path. The value-bearing fields stay as raw JSON so that a
/// non-numeric coordinate or a malformed tower never aborts deserialization;
/// they are validated in [`TryFrom`], producing a typed [`LocationReport`]
/// before any logic runs, and anything unusable ends up as `InvalidInput`.
#[derive(Debug, Deserialize)]
pub struct UpdateLocationRequest {
    /// Accepted under either `device_id` or `deviceId`.
    #[serde(default, alias = "deviceId")]
    pub device_id: Option<String>,
    #[serde(default)]
    pub lat: Option<serde_json::Value>,
    #[serde(default)]
    pub lng: Option<serde_json::Value>,
    #[serde(default)]
    pub accuracy: Option<serde_json::Value>,
    #[serde(default)]
    pub tower: Option<serde_json::Value>,
}

/// Cell-tower descriptor within an update request.
#[derive(Debug, Deserialize)]
pub struct TowerRequest {
    pub cid: u64,
    pub lac: u32,
    pub mcc: u16,
    pub mnc: u16,
    #[serde(default)]
    pub signal: Option<i32>,
}

impl From<TowerRequest> for CellTower {
    fn from(req: TowerRequest) -> Self {
        Self {
            cid: req.cid,
            lac: req.lac,
            mcc: req.mcc,
            mnc: req.mnc,
            signal: req.signal,
        }
    }
}

impl TryFrom<UpdateLocationRequest> for LocationReport {
    type Error = InvalidInputError;

    /// Resolution precedence: GPS coordinates when both are numeric, then a
    /// well-formed tower descriptor, otherwise the payload carries no usable
    /// location. An empty or malformed tower object counts as no tower.
    fn try_from(req: UpdateLocationRequest) -> Result<Self, Self::Error> {
        let device_id = DeviceId::from_client(req.device_id);

        let lat = req.lat.as_ref().and_then(serde_json::Value::as_f64);
        let lng = req.lng.as_ref().and_then(serde_json::Value::as_f64);
        if let (Some(lat), Some(lng)) = (lat, lng) {
            let accuracy = req.accuracy.as_ref().and_then(serde_json::Value::as_f64);
            return Ok(Self::gps(device_id, lat, lng, accuracy));
        }

        if let Some(tower) = req.tower {
            if let Ok(tower) = serde_json::from_value::<TowerRequest>(tower) {
                return Ok(Self::cell(device_id, tower.into()));
            }
        }

        Err(InvalidInputError::NoLocationData)
    }
}

/// Response body for a successful `POST /update_location`.
#[derive(Debug, Serialize)]
pub struct UpdateLocationResponse {
    pub status: &'static str,
    pub device_id: DeviceId,
    pub lat: f64,
    pub lng: f64,
    pub accuracy: Option<f64>,
    pub source: LocationSource,
}

impl From<LocationRecord> for UpdateLocationResponse {
    fn from(record: LocationRecord) -> Self {
        Self {
            status: "success",
            device_id: record.device_id,
            lat: record.lat,
            lng: record.lng,
            accuracy: record.accuracy,
            source: record.source,
        }
    }
}

/// Response body for `GET /get_location/{device_id}`.
#[derive(Debug, Serialize)]
pub struct GetLocationResponse {
    pub device_id: DeviceId,
    pub lat: f64,
    pub lng: f64,
    pub accuracy: Option<f64>,
    pub source: LocationSource,
    /// ISO-8601 / RFC 3339 insert timestamp.
    pub timestamp: String,
}

impl From<LocationRecord> for GetLocationResponse {
    fn from(record: LocationRecord) -> Self {
        Self {
            device_id: record.device_id,
            lat: record.lat,
            lng: record.lng,
            accuracy: record.accuracy,
            source: record.source,
            timestamp: record.timestamp.to_rfc3339(),
        }
    }
}

/// Response body for `GET /devices`.
#[derive(Debug, Serialize)]
pub struct DevicesResponse {
    pub devices: Vec<DeviceId>,
}

/// `POST /update_location`
pub async fn update<R, G>(
    State(state): State<AppState<R, G>>,
    Json(req): Json<UpdateLocationRequest>,
) -> Result<Json<UpdateLocationResponse>, ApiError>
where
    R: LocationRepository + Send + Sync + 'static,
    G: CellGeolocator + Send + Sync + 'static,
{
    let report = LocationReport::try_from(req).map_err(WaypostError::from)?;
    let record = state.location_service.submit_report(report).await?;
    Ok(Json(UpdateLocationResponse::from(record)))
}

/// `GET /get_location/{device_id}`
pub async fn get_latest<R, G>(
    State(state): State<AppState<R, G>>,
    Path(device_id): Path<String>,
) -> Result<Json<GetLocationResponse>, ApiError>
where
    R: LocationRepository + Send + Sync + 'static,
    G: CellGeolocator + Send + Sync + 'static,
{
    let device_id = DeviceId::new(device_id);
    let record = state.location_service.latest_location(&device_id).await?;
    Ok(Json(GetLocationResponse::from(record)))
}

/// `GET /devices`
pub async fn list_devices<R, G>(
    State(state): State<AppState<R, G>>,
) -> Result<Json<DevicesResponse>, ApiError>
where
    R: LocationRepository + Send + Sync + 'static,
    G: CellGeolocator + Send + Sync + 'static,
{
    let devices = state.location_service.list_devices().await?;
    Ok(Json(DevicesResponse { devices }))
}
