//! Conversation and messaging endpoints.

use bytes::Bytes;
use http_body_util::Full;
use hyper::body::Incoming;
use hyper::{Request, Response, StatusCode};
use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;

use super::{failure, json_response, read_json_body};
use crate::server::AppState;
use crate::types::AgoraError;

#[derive(Debug, Deserialize)]
struct MessageBody {
    content: Option<String>,
}

/// Handle `GET /api/conversations/{userId}` - all conversations involving
/// the user, most recent activity first.
pub fn handle_list_conversations(state: Arc<AppState>, user_id: &str) -> Response<Full<Bytes>> {
    json_response(StatusCode::OK, &state.store.list_conversations(user_id))
}

/// Handle `GET /api/conversations/{userId}/{otherUserId}`.
pub fn handle_get_conversation(
    state: Arc<AppState>,
    user_id: &str,
    other_user_id: &str,
) -> Response<Full<Bytes>> {
    match state.store.get_conversation(user_id, other_user_id) {
        Ok(conv) => json_response(StatusCode::OK, &conv),
        Err(e) => failure(&e),
    }
}

/// Handle `POST /api/conversations/{userId}/{otherUserId}/message`.
pub async fn handle_send_message(
    req: Request<Incoming>,
    state: Arc<AppState>,
    user_id: &str,
    other_user_id: &str,
) -> Response<Full<Bytes>> {
    let body: MessageBody = match read_json_body(req).await {
        Ok(b) => b,
        Err(e) => return failure(&e),
    };
    let Some(content) = body.content.filter(|s| !s.is_empty()) else {
        return failure(&AgoraError::Malformed("Missing content".into()));
    };

    debug!(from = user_id, to = other_user_id, "Send message");
    let message = state.store.send_message(user_id, other_user_id, &content);
    json_response(StatusCode::OK, &message)
}
