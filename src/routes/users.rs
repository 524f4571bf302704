//! User and relationship endpoints.

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
#[serde(rename_all = "camelCase")]
struct FriendRequestBody {
    from_user_id: Option<String>,
}

/// Handle `GET /api/users`.
pub fn handle_list_users(state: Arc<AppState>) -> Response<Full<Bytes>> {
    json_response(StatusCode::OK, &state.store.list_users())
}

/// Handle `GET /api/users/{id}`.
pub fn handle_get_user(state: Arc<AppState>, id: &str) -> Response<Full<Bytes>> {
    match state.store.get_user(id) {
        Ok(user) => json_response(StatusCode::OK, &user),
        Err(e) => failure(&e),
    }
}

/// Handle `GET /api/users/{id}/friends`.
pub fn handle_list_friends(state: Arc<AppState>, id: &str) -> Response<Full<Bytes>> {
    match state.store.list_friends(id) {
        Ok(friends) => json_response(StatusCode::OK, &friends),
        Err(e) => failure(&e),
    }
}

/// Handle `POST /api/users/{id}/friend-request`.
pub async fn handle_friend_request(
    req: Request<Incoming>,
    state: Arc<AppState>,
    target_id: &str,
) -> Response<Full<Bytes>> {
    let body: FriendRequestBody = match read_json_body(req).await {
        Ok(b) => b,
        Err(e) => return failure(&e),
    };
    let Some(from_user_id) = body.from_user_id.filter(|s| !s.is_empty()) else {
        return failure(&AgoraError::Malformed("Missing fromUserId".into()));
    };

    debug!(to = target_id, from = %from_user_id, "Friend request");
    match state.store.send_friend_request(target_id, &from_user_id) {
        Ok(()) => json_response(StatusCode::OK, &serde_json::json!({ "success": true })),
        Err(e) => failure(&e),
    }
}

/// Handle `POST /api/users/{id}/accept-friend`.
pub async fn handle_accept_friend(
    req: Request<Incoming>,
    state: Arc<AppState>,
    user_id: &str,
) -> Response<Full<Bytes>> {
    let body: FriendRequestBody = match read_json_body(req).await {
        Ok(b) => b,
        Err(e) => return failure(&e),
    };
    let Some(from_user_id) = body.from_user_id.filter(|s| !s.is_empty()) else {
        return failure(&AgoraError::Malformed("Missing fromUserId".into()));
    };

    debug!(user = user_id, from = %from_user_id, "Accept friend request");
    match state.store.accept_friend_request(user_id, &from_user_id) {
        Ok(()) => json_response(StatusCode::OK, &serde_json::json!({ "success": true })),
        Err(e) => failure(&e),
    }
}
