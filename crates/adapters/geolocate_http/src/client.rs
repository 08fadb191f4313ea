//! Reqwest-backed geolocation client.

use std::future::Future;
use std::time::Duration;

use reqwest::Client;

use waypost_app::ports::{CellFix, CellGeolocator};
use waypost_domain::error::UpstreamError;
use waypost_domain::report::CellTower;

use crate::config::GeolocateConfig;
use crate::dto::{GeolocateRequest, GeolocateResponse};

/// Geolocation client for the Google Geolocation API.
///
/// The timeout is enforced by the underlying reqwest client, so every call
/// through [`CellGeolocator::locate`] is bounded; a timeout surfaces as
/// [`UpstreamError::Timeout`] rather than blocking the request.
pub struct GoogleGeolocator {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl GoogleGeolocator {
    /// Build a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(config: &GeolocateConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
        })
    }
}

impl CellGeolocator for GoogleGeolocator {
    fn locate(
        &self,
        tower: &CellTower,
    ) -> impl Future<Output = Result<CellFix, UpstreamError>> + Send {
        let request = GeolocateRequest::from(tower);
        let client = self.client.clone();
        let endpoint = self.endpoint.clone();
        let api_key = self.api_key.clone();

        async move {
            tracing::debug!(endpoint = %endpoint, "querying geolocation provider");

            let response = client
                .post(&endpoint)
                .query(&[("key", api_key.as_str())])
                .json(&request)
                .send()
                .await
                .map_err(map_transport_error)?;

            let status = response.status();
            let body = response.text().await.map_err(map_transport_error)?;

            if !status.is_success() {
                tracing::warn!(status = status.as_u16(), "geolocation provider rejected request");
                return Err(UpstreamError::Status {
                    status: status.as_u16(),
                    body,
                });
            }

            let decoded: GeolocateResponse = serde_json::from_str(&body)
                .map_err(|err| UpstreamError::Decode(err.to_string()))?;

            Ok(CellFix {
                lat: decoded.location.lat,
                lng: decoded.location.lng,
                accuracy: decoded.accuracy,
            })
        }
    }
}

fn map_transport_error(err: reqwest::Error) -> UpstreamError {
    if err.is_timeout() {
        UpstreamError::Timeout
    } else {
        UpstreamError::Transport(err.to_string())
    }
}
