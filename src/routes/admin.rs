//! Administrative endpoints.

use bytes::Bytes;
use http_body_util::Full;
use hyper::{Response, StatusCode};
use std::sync::Arc;
use tracing::info;

use super::json_response;
use crate::server::AppState;

/// Handle `POST /api/reset` - discard all mutations and restore the seed
/// snapshot. Used by tests and demo tooling.
pub fn handle_reset(state: Arc<AppState>) -> Response<Full<Bytes>> {
    state.store.reset();
    info!("Dataset reset via API");
    json_response(
        StatusCode::OK,
        &serde_json::json!({ "success": true, "message": "Data reset successfully" }),
    )
}
