//! Login endpoint.
//!
//! Not real authentication: a lookup by email that falls back to creating
//! a stub account, exactly what the demo frontend expects.

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
struct LoginRequest {
    email: Option<String>,
}

/// Handle `POST /api/auth/login`.
pub async fn handle_login(req: Request<Incoming>, state: Arc<AppState>) -> Response<Full<Bytes>> {
    let body: LoginRequest = match read_json_body(req).await {
        Ok(b) => b,
        Err(e) => return failure(&e),
    };
    let Some(email) = body.email.filter(|e| !e.is_empty()) else {
        return failure(&AgoraError::Malformed("Missing email".into()));
    };

    debug!(email = %email, "Login request");
    let user = state.store.login_or_create(&email);
    json_response(
        StatusCode::OK,
        &serde_json::json!({ "success": true, "user": user }),
    )
}
