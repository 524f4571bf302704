//! Health and version endpoints.

use bytes::Bytes;
use http_body_util::Full;
use hyper::{Response, StatusCode};
use std::sync::Arc;

use super::json_response;
use crate::server::AppState;

/// Handle `GET /health` - liveness probe with collection sizes.
pub fn health_check(state: Arc<AppState>) -> Response<Full<Bytes>> {
    let stats = state.store.stats();
    json_response(
        StatusCode::OK,
        &serde_json::json!({
            "status": "ok",
            "users": stats.users,
            "posts": stats.posts,
            "conversations": stats.conversations,
            "notifications": stats.notifications,
        }),
    )
}

/// Handle `GET /version` - build info for deployment verification.
pub fn version_info() -> Response<Full<Bytes>> {
    json_response(
        StatusCode::OK,
        &serde_json::json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
        }),
    )
}
