//! Location records — resolved coordinates and persisted observations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::device::DeviceId;
use crate::time::Timestamp;

/// Identifier of a persisted [`LocationRecord`].
///
/// Assigned by the store on insert, monotonically increasing, never reused.
/// For a given device, "latest record" means the record with the highest id;
/// insertion order is the authoritative tie-break, not the timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(i64);

impl RecordId {
    /// Wrap a raw database identifier.
    #[must_use]
    pub fn from_i64(raw: i64) -> Self {
        Self(raw)
    }

    /// Access the inner integer.
    #[must_use]
    pub fn as_i64(self) -> i64 {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Which resolution path produced the coordinates of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationSource {
    /// Client-supplied GPS coordinates; no external call involved.
    Browser,
    /// Coordinates resolved from cell-tower identifiers by the provider.
    Cell,
}

impl LocationSource {
    /// Canonical string form (`"browser"` / `"cell"`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Cell => "cell",
        }
    }
}

impl fmt::Display for LocationSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown source tag.
#[derive(Debug, thiserror::Error)]
#[error("unknown location source: {0}")]
pub struct ParseLocationSourceError(String);

impl FromStr for LocationSource {
    type Err = ParseLocationSourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "browser" => Ok(Self::Browser),
            "cell" => Ok(Self::Cell),
            other => Err(ParseLocationSourceError(other.to_string())),
        }
    }
}

/// Coordinates produced by the resolution step, not yet persisted.
///
/// Holds everything a [`LocationRecord`] needs except the store-assigned id
/// and timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedLocation {
    pub device_id: DeviceId,
    pub lat: f64,
    pub lng: f64,
    pub accuracy: Option<f64>,
    pub source: LocationSource,
}

impl ResolvedLocation {
    /// Build a browser-sourced resolution from client-supplied coordinates.
    ///
    /// A missing accuracy defaults to `0`, matching what browsers report
    /// when the reading has no error estimate.
    #[must_use]
    pub fn browser(device_id: DeviceId, lat: f64, lng: f64, accuracy: Option<f64>) -> Self {
        Self {
            device_id,
            lat,
            lng,
            accuracy: Some(accuracy.unwrap_or(0.0)),
            source: LocationSource::Browser,
        }
    }

    /// Build a cell-sourced resolution from a provider fix.
    ///
    /// Accuracy stays absent when the provider omits it; the asymmetry with
    /// the browser path is deliberate.
    #[must_use]
    pub fn cell(device_id: DeviceId, lat: f64, lng: f64, accuracy: Option<f64>) -> Self {
        Self {
            device_id,
            lat,
            lng,
            accuracy,
            source: LocationSource::Cell,
        }
    }
}

/// One persisted, immutable location observation.
///
/// Records are append-only: no update or delete operation exists, and they
/// are retained indefinitely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRecord {
    pub id: RecordId,
    pub device_id: DeviceId,
    pub lat: f64,
    pub lng: f64,
    pub accuracy: Option<f64>,
    pub source: LocationSource,
    pub timestamp: Timestamp,
}

impl LocationRecord {
    /// Materialize a record from a resolution plus store-assigned fields.
    #[must_use]
    pub fn from_resolved(resolved: ResolvedLocation, id: RecordId, timestamp: Timestamp) -> Self {
        Self {
            id,
            device_id: resolved.device_id,
            lat: resolved.lat,
            lng: resolved.lng,
            accuracy: resolved.accuracy,
            source: resolved.source,
            timestamp,
        }
    }
}
