//! Location service — use-cases for ingesting and reading device locations.

use waypost_domain::device::DeviceId;
use waypost_domain::error::{NotFoundError, WaypostError};
use waypost_domain::location::{LocationRecord, ResolvedLocation};
use waypost_domain::report::{LocationReport, ReportPayload};

use crate::ports::{CellGeolocator, LocationRepository};

/// Application service for the location ingestion and read path.
pub struct LocationService<R, G> {
    repo: R,
    geolocator: G,
}

impl<R: LocationRepository, G: CellGeolocator> LocationService<R, G> {
    /// Create a new service backed by the given repository and geolocator.
    pub fn new(repo: R, geolocator: G) -> Self {
        Self { repo, geolocator }
    }

    /// Resolve a report into coordinates and append the result to the store.
    ///
    /// A record is only ever persisted on a successful resolution; any
    /// failure leaves the store untouched.
    ///
    /// # Errors
    ///
    /// Returns [`WaypostError::Upstream`] when the cell path fails at the
    /// provider, or a storage error propagated from the repository.
    #[tracing::instrument(skip(self, report), fields(device_id = %report.device_id))]
    pub async fn submit_report(&self, report: LocationReport) -> Result<LocationRecord, WaypostError> {
        let resolved = self.resolve(report).await?;
        let record = self.repo.append(resolved).await?;
        tracing::debug!(id = %record.id, source = %record.source, "location recorded");
        Ok(record)
    }

    /// Turn a report into a [`ResolvedLocation`].
    ///
    /// GPS readings resolve locally. Tower descriptors delegate to the
    /// geolocation provider, exactly one outbound call per report.
    async fn resolve(&self, report: LocationReport) -> Result<ResolvedLocation, WaypostError> {
        match report.payload {
            ReportPayload::Gps { lat, lng, accuracy } => {
                Ok(ResolvedLocation::browser(report.device_id, lat, lng, accuracy))
            }
            ReportPayload::Cell(tower) => {
                let fix = self.geolocator.locate(&tower).await?;
                Ok(ResolvedLocation::cell(
                    report.device_id,
                    fix.lat,
                    fix.lng,
                    fix.accuracy,
                ))
            }
        }
    }

    /// Latest known location of a device, by highest record id.
    ///
    /// # Errors
    ///
    /// Returns [`WaypostError::NotFound`] when the device has no records,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn latest_location(&self, device_id: &DeviceId) -> Result<LocationRecord, WaypostError> {
        self.repo.latest(device_id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Device",
                id: device_id.to_string(),
            }
            .into()
        })
    }

    /// Distinct identifiers of all devices with at least one record.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_devices(&self) -> Result<Vec<DeviceId>, WaypostError> {
        self.repo.device_ids().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::Future;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use waypost_domain::error::UpstreamError;
    use waypost_domain::location::{LocationSource, RecordId};
    use waypost_domain::report::CellTower;
    use waypost_domain::time;

    use crate::ports::CellFix;

    #[derive(Default)]
    struct InMemoryLocationRepo {
        records: Mutex<Vec<LocationRecord>>,
    }

    impl LocationRepository for InMemoryLocationRepo {
        fn append(
            &self,
            location: ResolvedLocation,
        ) -> impl Future<Output = Result<LocationRecord, WaypostError>> + Send {
            let mut records = self.records.lock().unwrap();
            let id = RecordId::from_i64(records.len() as i64 + 1);
            let record = LocationRecord::from_resolved(location, id, time::now());
            records.push(record.clone());
            async { Ok(record) }
        }

        fn latest(
            &self,
            device_id: &DeviceId,
        ) -> impl Future<Output = Result<Option<LocationRecord>, WaypostError>> + Send {
            let records = self.records.lock().unwrap();
            let result = records
                .iter()
                .filter(|r| &r.device_id == device_id)
                .max_by_key(|r| r.id)
                .cloned();
            async { Ok(result) }
        }

        fn device_ids(&self) -> impl Future<Output = Result<Vec<DeviceId>, WaypostError>> + Send {
            let records = self.records.lock().unwrap();
            let mut ids: Vec<DeviceId> = Vec::new();
            for record in records.iter() {
                if !ids.contains(&record.device_id) {
                    ids.push(record.device_id.clone());
                }
            }
            async { Ok(ids) }
        }
    }

    impl InMemoryLocationRepo {
        fn len(&self) -> usize {
            self.records.lock().unwrap().len()
        }
    }

    enum StubResponse {
        Fix(CellFix),
        Status(u16),
    }

    struct StubGeolocator {
        calls: AtomicUsize,
        response: StubResponse,
    }

    impl StubGeolocator {
        fn returning(fix: CellFix) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                response: StubResponse::Fix(fix),
            }
        }

        fn rejecting(status: u16) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                response: StubResponse::Status(status),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl CellGeolocator for StubGeolocator {
        fn locate(
            &self,
            _tower: &CellTower,
        ) -> impl Future<Output = Result<CellFix, UpstreamError>> + Send {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let result = match &self.response {
                StubResponse::Fix(fix) => Ok(fix.clone()),
                StubResponse::Status(status) => Err(UpstreamError::Status {
                    status: *status,
                    body: "denied".to_string(),
                }),
            };
            async { result }
        }
    }

    fn make_service(
        geolocator: StubGeolocator,
    ) -> LocationService<InMemoryLocationRepo, StubGeolocator> {
        LocationService::new(InMemoryLocationRepo::default(), geolocator)
    }

    fn tower() -> CellTower {
        CellTower {
            cid: 1,
            lac: 2,
            mcc: 310,
            mnc: 260,
            signal: None,
        }
    }

    #[tokio::test]
    async fn should_resolve_gps_report_without_calling_provider() {
        let svc = make_service(StubGeolocator::rejecting(500));
        let report = LocationReport::gps(DeviceId::new("d1"), 37.0, -122.0, None);

        let record = svc.submit_report(report).await.unwrap();

        assert_eq!(record.source, LocationSource::Browser);
        assert_eq!(record.lat, 37.0);
        assert_eq!(record.lng, -122.0);
        assert_eq!(record.accuracy, Some(0.0));
        assert_eq!(svc.geolocator.calls(), 0);
    }

    #[tokio::test]
    async fn should_call_provider_exactly_once_for_cell_report() {
        let svc = make_service(StubGeolocator::returning(CellFix {
            lat: 1.0,
            lng: 2.0,
            accuracy: Some(50.0),
        }));

        let record = svc
            .submit_report(LocationReport::cell(DeviceId::new("d1"), tower()))
            .await
            .unwrap();

        assert_eq!(record.source, LocationSource::Cell);
        assert_eq!(record.lat, 1.0);
        assert_eq!(record.lng, 2.0);
        assert_eq!(record.accuracy, Some(50.0));
        assert_eq!(svc.geolocator.calls(), 1);
    }

    #[tokio::test]
    async fn should_keep_cell_accuracy_absent_when_provider_omits_it() {
        let svc = make_service(StubGeolocator::returning(CellFix {
            lat: 1.0,
            lng: 2.0,
            accuracy: None,
        }));

        let record = svc
            .submit_report(LocationReport::cell(DeviceId::new("d1"), tower()))
            .await
            .unwrap();

        assert_eq!(record.accuracy, None);
    }

    #[tokio::test]
    async fn should_not_store_anything_when_provider_rejects() {
        let svc = make_service(StubGeolocator::rejecting(403));

        let result = svc
            .submit_report(LocationReport::cell(DeviceId::new("d1"), tower()))
            .await;

        assert!(matches!(
            result,
            Err(WaypostError::Upstream(UpstreamError::Status { status: 403, .. }))
        ));
        assert_eq!(svc.repo.len(), 0);
    }

    #[tokio::test]
    async fn should_return_latest_record_by_highest_id() {
        let svc = make_service(StubGeolocator::rejecting(500));
        let device = DeviceId::new("d1");
        for lat in [10.0, 20.0, 30.0] {
            svc.submit_report(LocationReport::gps(device.clone(), lat, 0.0, None))
                .await
                .unwrap();
        }

        let latest = svc.latest_location(&device).await.unwrap();
        assert_eq!(latest.lat, 30.0);
        assert_eq!(latest.id, RecordId::from_i64(3));
    }

    #[tokio::test]
    async fn should_return_not_found_when_device_has_no_records() {
        let svc = make_service(StubGeolocator::rejecting(500));
        let result = svc.latest_location(&DeviceId::new("unknown-device")).await;
        assert!(matches!(result, Err(WaypostError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_list_distinct_device_ids() {
        let svc = make_service(StubGeolocator::rejecting(500));
        for device in ["a", "b", "a"] {
            svc.submit_report(LocationReport::gps(DeviceId::new(device), 1.0, 2.0, None))
                .await
                .unwrap();
        }

        let devices = svc.list_devices().await.unwrap();
        assert_eq!(devices, vec![DeviceId::new("a"), DeviceId::new("b")]);
    }

    #[tokio::test]
    async fn should_default_missing_device_id_to_anonymous() {
        let svc = make_service(StubGeolocator::rejecting(500));
        let report = LocationReport::gps(DeviceId::from_client(None), 1.0, 2.0, None);

        let record = svc.submit_report(report).await.unwrap();
        assert!(record.device_id.is_anonymous());
    }
}
