//! Post, like and comment endpoints.

use bytes::Bytes;
use http_body_util::Full;
use hyper::body::Incoming;
use hyper::{Request, Response, StatusCode};
use serde::Deserialize;
use std::sync::Arc;

use super::{failure, json_response, read_json_body};
use crate::server::AppState;
use crate::types::AgoraError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreatePostBody {
    user_id: Option<String>,
    content: Option<String>,
    image: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LikeBody {
    user_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommentBody {
    user_id: Option<String>,
    content: Option<String>,
}

/// Handle `GET /api/posts` - the denormalized feed, newest first.
pub fn handle_feed(state: Arc<AppState>) -> Response<Full<Bytes>> {
    json_response(StatusCode::OK, &state.store.list_feed())
}

/// Handle `GET /api/posts/user/{userId}`.
pub fn handle_user_posts(state: Arc<AppState>, user_id: &str) -> Response<Full<Bytes>> {
    json_response(StatusCode::OK, &state.store.list_user_posts(user_id))
}

/// Handle `POST /api/posts`.
pub async fn handle_create_post(
    req: Request<Incoming>,
    state: Arc<AppState>,
) -> Response<Full<Bytes>> {
    let body: CreatePostBody = match read_json_body(req).await {
        Ok(b) => b,
        Err(e) => return failure(&e),
    };
    let Some(user_id) = body.user_id.filter(|s| !s.is_empty()) else {
        return failure(&AgoraError::Malformed("Missing userId".into()));
    };
    let Some(content) = body.content else {
        return failure(&AgoraError::Malformed("Missing content".into()));
    };

    let post = state.store.create_post(&user_id, &content, body.image);
    json_response(StatusCode::OK, &post)
}

/// Handle `POST /api/posts/{id}/like` - toggle semantics, returns the
/// resulting like set.
pub async fn handle_toggle_like(
    req: Request<Incoming>,
    state: Arc<AppState>,
    post_id: &str,
) -> Response<Full<Bytes>> {
    let body: LikeBody = match read_json_body(req).await {
        Ok(b) => b,
        Err(e) => return failure(&e),
    };
    let Some(user_id) = body.user_id.filter(|s| !s.is_empty()) else {
        return failure(&AgoraError::Malformed("Missing userId".into()));
    };

    match state.store.toggle_like(post_id, &user_id) {
        Ok(likes) => json_response(StatusCode::OK, &serde_json::json!({ "likes": likes })),
        Err(e) => failure(&e),
    }
}

/// Handle `POST /api/posts/{id}/comment`.
pub async fn handle_add_comment(
    req: Request<Incoming>,
    state: Arc<AppState>,
    post_id: &str,
) -> Response<Full<Bytes>> {
    let body: CommentBody = match read_json_body(req).await {
        Ok(b) => b,
        Err(e) => return failure(&e),
    };
    let Some(user_id) = body.user_id.filter(|s| !s.is_empty()) else {
        return failure(&AgoraError::Malformed("Missing userId".into()));
    };
    let Some(content) = body.content else {
        return failure(&AgoraError::Malformed("Missing content".into()));
    };

    match state.store.add_comment(post_id, &user_id, &content) {
        Ok(comment) => json_response(StatusCode::OK, &comment),
        Err(e) => failure(&e),
    }
}
