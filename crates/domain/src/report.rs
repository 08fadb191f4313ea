//! Location reports — the validated form of an inbound payload.
//!
//! The HTTP boundary turns loosely-structured JSON into a [`LocationReport`]
//! up front, so the resolution logic never touches raw payloads.

use serde::{Deserialize, Serialize};

use crate::device::DeviceId;

/// Identifiers of a single cell tower, as reported by a modem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellTower {
    /// Cell id.
    pub cid: u64,
    /// Location area code.
    pub lac: u32,
    /// Mobile country code.
    pub mcc: u16,
    /// Mobile network code.
    pub mnc: u16,
    /// Signal strength in dBm, when the modem reports one.
    #[serde(default)]
    pub signal: Option<i32>,
}

/// The location-bearing part of a report, in resolution precedence order:
/// GPS coordinates win over a tower descriptor when both are present.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportPayload {
    /// Client-supplied GPS reading.
    Gps {
        lat: f64,
        lng: f64,
        accuracy: Option<f64>,
    },
    /// Cell-tower descriptor to be resolved by the geolocation provider.
    Cell(CellTower),
}

/// A validated inbound location report.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationReport {
    pub device_id: DeviceId,
    pub payload: ReportPayload,
}

impl LocationReport {
    /// Build a GPS-sourced report.
    #[must_use]
    pub fn gps(device_id: DeviceId, lat: f64, lng: f64, accuracy: Option<f64>) -> Self {
        Self {
            device_id,
            payload: ReportPayload::Gps { lat, lng, accuracy },
        }
    }

    /// Build a cell-tower report.
    #[must_use]
    pub fn cell(device_id: DeviceId, tower: CellTower) -> Self {
        Self {
            device_id,
            payload: ReportPayload::Cell(tower),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_gps_report() {
        let report = LocationReport::gps(DeviceId::new("d1"), 37.0, -122.0, Some(5.0));
        assert!(matches!(
            report.payload,
            ReportPayload::Gps {
                lat,
                lng,
                accuracy: Some(accuracy)
            } if lat == 37.0 && lng == -122.0 && accuracy == 5.0
        ));
    }

    #[test]
    fn should_build_cell_report() {
        let tower = CellTower {
            cid: 1,
            lac: 2,
            mcc: 310,
            mnc: 260,
            signal: Some(-71),
        };
        let report = LocationReport::cell(DeviceId::anonymous(), tower.clone());
        assert_eq!(report.payload, ReportPayload::Cell(tower));
        assert!(report.device_id.is_anonymous());
    }

    #[test]
    fn should_deserialize_tower_without_signal() {
        let tower: CellTower =
            serde_json::from_str(r#"{"cid":1,"lac":2,"mcc":310,"mnc":260}"#).unwrap();
        assert_eq!(tower.signal, None);
    }
}
