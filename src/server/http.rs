//! HTTP server implementation
//!
//! hyper http1 with TokioIo, one task per connection and a match-based
//! router over `(Method, path)`. Handlers that consume the request body
//! take the request by value; everything else routes on the path alone.

use bytes::Bytes;
use http_body_util::Full;
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Method, Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::config::Args;
use crate::routes;
use crate::store::EntityStore;
use crate::types::Result;

/// Shared application state
pub struct AppState {
    pub args: Args,
    /// The social dataset behind its single lock.
    pub store: Arc<EntityStore>,
}

impl AppState {
    /// Create application state with a freshly seeded store.
    pub fn new(args: Args) -> Self {
        Self {
            args,
            store: Arc::new(EntityStore::new()),
        }
    }
}

/// Start the HTTP server.
pub async fn run(state: Arc<AppState>) -> Result<()> {
    let listener = TcpListener::bind(state.args.listen).await?;

    let stats = state.store.stats();
    info!("Agora listening on {}", state.args.listen);
    info!(
        "Seeded dataset: {} users, {} posts, {} conversations, {} notifications",
        stats.users, stats.posts, stats.conversations, stats.notifications
    );

    loop {
        match listener.accept().await {
            Ok((stream, addr)) => {
                let state = Arc::clone(&state);
                tokio::spawn(async move {
                    let io = TokioIo::new(stream);

                    let service = service_fn(move |req| {
                        let state = Arc::clone(&state);
                        async move {
                            Ok::<_, Infallible>(handle_request(state, addr, req).await)
                        }
                    });

                    if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
                        error!("Error serving connection from {}: {:?}", addr, err);
                    }
                });
            }
            Err(e) => {
                error!("Error accepting connection: {:?}", e);
            }
        }
    }
}

/// Route incoming HTTP requests
async fn handle_request(
    state: Arc<AppState>,
    addr: SocketAddr,
    req: Request<Incoming>,
) -> Response<Full<Bytes>> {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    info!("[{}] {} {}", addr, method, path);

    match (method, path.as_str()) {
        // Liveness probe
        (Method::GET, "/health") | (Method::GET, "/healthz") => routes::health_check(state),

        // Version info for deployment verification
        (Method::GET, "/version") => routes::version_info(),

        // CORS preflight
        (Method::OPTIONS, _) => preflight_response(),

        // Auth
        (Method::POST, "/api/auth/login") => routes::handle_login(req, state).await,

        // Users and relationships
        (Method::GET, "/api/users") => routes::handle_list_users(state),
        (method, p) if p.starts_with("/api/users/") => {
            let rest = p.strip_prefix("/api/users/").unwrap_or("");
            let segments: Vec<&str> = rest.split('/').collect();
            match (method, segments.as_slice()) {
                (Method::GET, [id]) => routes::handle_get_user(state, id),
                (Method::GET, [id, "friends"]) => routes::handle_list_friends(state, id),
                (Method::POST, [id, "friend-request"]) => {
                    routes::handle_friend_request(req, state, id).await
                }
                (Method::POST, [id, "accept-friend"]) => {
                    routes::handle_accept_friend(req, state, id).await
                }
                _ => not_found_response(&path),
            }
        }

        // Posts, likes, comments
        (Method::GET, "/api/posts") => routes::handle_feed(state),
        (Method::POST, "/api/posts") => routes::handle_create_post(req, state).await,
        (Method::GET, p) if p.starts_with("/api/posts/user/") => {
            let user_id = p.strip_prefix("/api/posts/user/").unwrap_or("");
            routes::handle_user_posts(state, user_id)
        }
        (Method::POST, p) if p.starts_with("/api/posts/") => {
            let rest = p.strip_prefix("/api/posts/").unwrap_or("");
            let segments: Vec<&str> = rest.split('/').collect();
            match segments.as_slice() {
                [id, "like"] => routes::handle_toggle_like(req, state, id).await,
                [id, "comment"] => routes::handle_add_comment(req, state, id).await,
                _ => not_found_response(&path),
            }
        }

        // Conversations and messages
        (method, p) if p.starts_with("/api/conversations/") => {
            let rest = p.strip_prefix("/api/conversations/").unwrap_or("");
            let segments: Vec<&str> = rest.split('/').collect();
            match (method, segments.as_slice()) {
                (Method::GET, [user_id]) => routes::handle_list_conversations(state, user_id),
                (Method::GET, [user_id, other_id]) => {
                    routes::handle_get_conversation(state, user_id, other_id)
                }
                (Method::POST, [user_id, other_id, "message"]) => {
                    routes::handle_send_message(req, state, user_id, other_id).await
                }
                _ => not_found_response(&path),
            }
        }

        // Notifications
        (Method::GET, p) if p.starts_with("/api/notifications/") => {
            let user_id = p.strip_prefix("/api/notifications/").unwrap_or("");
            routes::handle_list_notifications(state, user_id)
        }

        // Reset to seed data (for testing)
        (Method::POST, "/api/reset") => routes::handle_reset(state),

        // Not found
        _ => not_found_response(&path),
    }
}

/// CORS preflight response
fn preflight_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::OK)
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Headers", "*")
        .header("Access-Control-Allow-Methods", "GET, POST, OPTIONS")
        .body(Full::new(Bytes::new()))
        .unwrap()
}

/// Not found response
fn not_found_response(path: &str) -> Response<Full<Bytes>> {
    let body = serde_json::json!({
        "error": "Not Found",
        "path": path,
    });

    Response::builder()
        .status(StatusCode::NOT_FOUND)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(Full::new(Bytes::from(body.to_string())))
        .unwrap()
}
