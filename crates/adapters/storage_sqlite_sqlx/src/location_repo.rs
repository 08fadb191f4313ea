//! `SQLite` implementation of [`LocationRepository`].

use std::future::Future;
use std::str::FromStr;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use waypost_app::ports::LocationRepository;
use waypost_domain::device::DeviceId;
use waypost_domain::error::WaypostError;
use waypost_domain::location::{LocationRecord, LocationSource, RecordId, ResolvedLocation};
use waypost_domain::time;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`LocationRecord`]
/// without polluting domain structs with database concerns.
struct Wrapper(LocationRecord);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<LocationRecord> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let device_id: String = row.try_get("device_id")?;
        let lat: f64 = row.try_get("lat")?;
        let lng: f64 = row.try_get("lng")?;
        let accuracy: Option<f64> = row.try_get("accuracy")?;
        let source: String = row.try_get("source")?;
        let timestamp: String = row.try_get("timestamp")?;

        let source = LocationSource::from_str(&source)
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let timestamp = chrono::DateTime::parse_from_rfc3339(&timestamp)
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))?
            .to_utc();

        Ok(Self(LocationRecord {
            id: RecordId::from_i64(id),
            device_id: DeviceId::new(device_id),
            lat,
            lng,
            accuracy,
            source,
            timestamp,
        }))
    }
}

const INSERT: &str = r"
    INSERT INTO locations (device_id, lat, lng, accuracy, source, timestamp)
    VALUES (?, ?, ?, ?, ?, ?)
    RETURNING id
";

const SELECT_LATEST_BY_DEVICE: &str = r"
    SELECT * FROM locations
    WHERE device_id = ?
    ORDER BY id DESC
    LIMIT 1
";

const SELECT_DISTINCT_DEVICE_IDS: &str =
    "SELECT DISTINCT device_id FROM locations ORDER BY device_id";

/// `SQLite`-backed location repository.
pub struct SqliteLocationRepository {
    pool: SqlitePool,
}

impl SqliteLocationRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl LocationRepository for SqliteLocationRepository {
    fn append(
        &self,
        location: ResolvedLocation,
    ) -> impl Future<Output = Result<LocationRecord, WaypostError>> + Send {
        let pool = self.pool.clone();
        async move {
            // Timestamp is assigned here, server-side; never client-supplied.
            let timestamp = time::now();

            let id: i64 = sqlx::query_scalar(INSERT)
                .bind(location.device_id.as_str())
                .bind(location.lat)
                .bind(location.lng)
                .bind(location.accuracy)
                .bind(location.source.as_str())
                .bind(timestamp.to_rfc3339())
                .fetch_one(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(LocationRecord::from_resolved(
                location,
                RecordId::from_i64(id),
                timestamp,
            ))
        }
    }

    fn latest(
        &self,
        device_id: &DeviceId,
    ) -> impl Future<Output = Result<Option<LocationRecord>, WaypostError>> + Send {
        let pool = self.pool.clone();
        let device_id = device_id.as_str().to_string();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_LATEST_BY_DEVICE)
                .bind(device_id)
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn device_ids(&self) -> impl Future<Output = Result<Vec<DeviceId>, WaypostError>> + Send {
        let pool = self.pool.clone();
        async move {
            let ids: Vec<String> = sqlx::query_scalar(SELECT_DISTINCT_DEVICE_IDS)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(ids.into_iter().map(DeviceId::new).collect())
        }
    }
}
