//! Notification endpoints. Notifications are read-only seed data.

use bytes::Bytes;
use http_body_util::Full;
use hyper::{Response, StatusCode};
use std::sync::Arc;

use super::json_response;
use crate::server::AppState;

/// Handle `GET /api/notifications/{userId}` - newest first, with the
/// originating user joined in.
pub fn handle_list_notifications(state: Arc<AppState>, user_id: &str) -> Response<Full<Bytes>> {
    json_response(StatusCode::OK, &state.store.list_notifications(user_id))
}
