//! HTTP routes for Agora.

pub mod admin;
pub mod auth;
pub mod conversations;
pub mod health;
pub mod notifications;
pub mod posts;
pub mod users;

pub use admin::handle_reset;
pub use auth::handle_login;
pub use conversations::{
    handle_get_conversation, handle_list_conversations, handle_send_message,
};
pub use health::{health_check, version_info};
pub use notifications::handle_list_notifications;
pub use posts::{
    handle_add_comment, handle_create_post, handle_feed, handle_toggle_like, handle_user_posts,
};
pub use users::{
    handle_accept_friend, handle_friend_request, handle_get_user, handle_list_friends,
    handle_list_users,
};

use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::body::Incoming;
use hyper::{Request, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::types::AgoraError;

/// Create a JSON response with permissive CORS, matching what every API
/// client of the original service expects.
pub(crate) fn json_response<T: Serialize>(status: StatusCode, data: &T) -> Response<Full<Bytes>> {
    let body = serde_json::to_string(data)
        .unwrap_or_else(|_| r#"{"error":"Serialization failed"}"#.to_string());

    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(Full::new(Bytes::from(body)))
        .unwrap()
}

/// Create an error response in the `{"error": "..."}` shape.
pub(crate) fn error_response(status: StatusCode, message: &str) -> Response<Full<Bytes>> {
    json_response(status, &serde_json::json!({ "error": message }))
}

/// Map a store error onto the wire: NotFound → 404, Malformed → 400,
/// anything else → 500. Never a process failure.
pub(crate) fn failure(err: &AgoraError) -> Response<Full<Bytes>> {
    let status = match err {
        AgoraError::NotFound(_) => StatusCode::NOT_FOUND,
        AgoraError::Malformed(_) => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    error_response(status, &err.to_string())
}

/// Collect and deserialize a JSON request body.
pub(crate) async fn read_json_body<T: DeserializeOwned>(
    req: Request<Incoming>,
) -> Result<T, AgoraError> {
    let body = req
        .collect()
        .await
        .map_err(|e| AgoraError::Malformed(format!("Failed to read request body: {e}")))?
        .to_bytes();
    serde_json::from_slice(&body).map_err(|e| AgoraError::Malformed(format!("Invalid JSON: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_status_mapping() {
        let resp = failure(&AgoraError::NotFound("User"));
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let resp = failure(&AgoraError::Malformed("Missing email".into()));
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = failure(&AgoraError::Internal("boom".into()));
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_json_response_sets_cors() {
        let resp = json_response(StatusCode::OK, &serde_json::json!({"ok": true}));
        assert_eq!(
            resp.headers()
                .get("Access-Control-Allow-Origin")
                .and_then(|h| h.to_str().ok()),
            Some("*")
        );
    }
}
