//! Storage port — the append-only location store.

use std::future::Future;

use waypost_domain::device::DeviceId;
use waypost_domain::error::WaypostError;
use waypost_domain::location::{LocationRecord, ResolvedLocation};

/// Append-only log of resolved locations, keyed by device identifier.
///
/// Implementations assign the record id and the server-side timestamp on
/// append. Ids are unique and monotonically increasing even under concurrent
/// appends; there is no update or delete operation.
pub trait LocationRepository {
    /// Persist a resolution, returning the stored record with its assigned
    /// id and timestamp.
    fn append(
        &self,
        location: ResolvedLocation,
    ) -> impl Future<Output = Result<LocationRecord, WaypostError>> + Send;

    /// The highest-id record for the given device, if any.
    fn latest(
        &self,
        device_id: &DeviceId,
    ) -> impl Future<Output = Result<Option<LocationRecord>, WaypostError>> + Send;

    /// Distinct set of device ids with at least one record, one entry per id
    /// regardless of record count.
    fn device_ids(&self) -> impl Future<Output = Result<Vec<DeviceId>, WaypostError>> + Send;
}
