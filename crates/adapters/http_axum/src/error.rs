//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use waypost_domain::error::{UpstreamError, WaypostError};

/// Maps [`WaypostError`] to an HTTP response with the appropriate status
/// code and wire-level JSON body.
pub struct ApiError(WaypostError);

impl From<WaypostError> for ApiError {
    fn from(err: WaypostError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self.0 {
            WaypostError::InvalidInput(err) => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "status": "error",
                    "message": err.to_string(),
                })),
            )
                .into_response(),

            WaypostError::NotFound(err) => (
                StatusCode::NOT_FOUND,
                Json(json!({
                    "error": format!("{} not found", err.entity),
                })),
            )
                .into_response(),

            WaypostError::Upstream(err) => {
                tracing::warn!(error = %err, "geolocation provider failure");
                let details = match err {
                    UpstreamError::Status { body, .. } => body.clone(),
                    other => other.to_string(),
                };
                (
                    StatusCode::BAD_GATEWAY,
                    Json(json!({
                        "status": "error",
                        "message": "Geolocation API error",
                        "details": details,
                    })),
                )
                    .into_response()
            }

            WaypostError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "internal server error" })),
                )
                    .into_response()
            }
        }
    }
}
