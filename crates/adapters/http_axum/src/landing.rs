//! Static landing page served at `/`.
//!
//! A fixed document describing the endpoints; no core logic lives here.

use axum::Router;
use axum::response::Html;
use axum::routing::get;

use waypost_app::ports::{CellGeolocator, LocationRepository};

use crate::state::AppState;

const INDEX: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>waypost</title>
</head>
<body>
  <h1>waypost</h1>
  <p>Device location report service.</p>
  <ul>
    <li><code>POST /update_location</code> — submit a GPS or cell-tower report</li>
    <li><code>GET /get_location/&lt;device_id&gt;</code> — latest known location</li>
    <li><code>GET /devices</code> — known device identifiers</li>
  </ul>
</body>
</html>
"#;

/// Build the landing page sub-router.
pub fn routes<R, G>() -> Router<AppState<R, G>>
where
    R: LocationRepository + Send + Sync + 'static,
    G: CellGeolocator + Send + Sync + 'static,
{
    Router::new().route("/", get(index))
}

async fn index() -> Html<&'static str> {
    Html(INDEX)
}
