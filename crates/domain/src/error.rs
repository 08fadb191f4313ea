//! Error types shared across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`WaypostError`]
//! via `#[from]`; no `String` variants.

/// Top-level error taxonomy.
///
/// The HTTP adapter maps each variant to a status code: `InvalidInput` → 400,
/// `NotFound` → 404, `Upstream` → 502, `Storage` → 500.
#[derive(Debug, thiserror::Error)]
pub enum WaypostError {
    /// The inbound payload is malformed or carries no usable location data.
    #[error("invalid input")]
    InvalidInput(#[from] InvalidInputError),

    /// The requested resource does not exist.
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// The geolocation provider failed or could not be reached.
    #[error("geolocation provider failure")]
    Upstream(#[from] UpstreamError),

    /// The persistence layer failed. Fatal for the request; surfaced as a
    /// generic server error, never silently swallowed.
    #[error("storage failure")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Payload validation failures.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum InvalidInputError {
    /// Neither GPS coordinates nor a tower descriptor were supplied.
    #[error("No valid location or tower payload provided")]
    NoLocationData,
}

/// A lookup found nothing.
#[derive(Debug, thiserror::Error)]
#[error("{entity} not found: {id}")]
pub struct NotFoundError {
    /// Kind of thing looked up (e.g. `"Device"`).
    pub entity: &'static str,
    /// The identifier that missed.
    pub id: String,
}

/// Failures of the external geolocation provider.
///
/// No retries anywhere in the path: each variant surfaces directly to the
/// caller as a 502.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// The provider answered with a non-success status.
    #[error("geolocation provider returned status {status}")]
    Status {
        status: u16,
        /// Raw response body, carried for diagnostics.
        body: String,
    },

    /// The provider did not answer within the configured timeout.
    #[error("geolocation provider request timed out")]
    Timeout,

    /// The provider could not be reached.
    #[error("failed to reach geolocation provider: {0}")]
    Transport(String),

    /// The provider answered with a body we could not decode.
    #[error("failed to decode geolocation provider response: {0}")]
    Decode(String),
}
