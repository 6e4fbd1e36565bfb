use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE};
use axum::http::{HeaderName, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use examcat_api::config::ServerConfig;
use examcat_api::routes;
use examcat_api::state::AppState;
use examcat_store::{DynStore, MemoryStore};

/// The shared admin secret used by the test configuration.
pub const TEST_ADMIN_PASSWORD: &str = "test-password";

/// Cookie header value for an authenticated admin request.
pub const ADMIN_COOKIE: &str = "admin_session=authenticated";

/// Build a test `ServerConfig` with safe defaults and the test admin
/// password set.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        admin_password: Some(TEST_ADMIN_PASSWORD.to_string()),
        google_project_id: "examcat-test".to_string(),
    }
}

/// Fresh in-memory store for one test.
pub fn memory_store() -> Arc<MemoryStore> {
    Arc::new(MemoryStore::new())
}

/// Build the full application router over the given store.
///
/// Mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout,
/// tracing, panic recovery) that production uses.
pub fn build_test_app(store: DynStore) -> Router {
    build_test_app_with_config(store, test_config())
}

/// Like [`build_test_app`] but with a caller-supplied configuration
/// (e.g. no admin password to exercise the fails-closed path).
pub fn build_test_app_with_config(store: DynStore, config: ServerConfig) -> Router {
    let state = AppState {
        store,
        config: Arc::new(config),
    };

    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:3000".parse().unwrap()])
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600));

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1", routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn request(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
    cookie: Option<&str>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }

    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    request(app, Method::GET, uri, None, None).await
}

pub async fn get_with_cookie(app: Router, uri: &str, cookie: &str) -> Response {
    request(app, Method::GET, uri, None, Some(cookie)).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    request(app, Method::POST, uri, Some(body), None).await
}

pub async fn post_json_with_cookie(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    cookie: &str,
) -> Response {
    request(app, Method::POST, uri, Some(body), Some(cookie)).await
}

pub async fn post_with_cookie(app: Router, uri: &str, cookie: &str) -> Response {
    request(app, Method::POST, uri, None, Some(cookie)).await
}

pub async fn post(app: Router, uri: &str) -> Response {
    request(app, Method::POST, uri, None, None).await
}

pub async fn put_json_with_cookie(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    cookie: &str,
) -> Response {
    request(app, Method::PUT, uri, Some(body), Some(cookie)).await
}

pub async fn delete_with_cookie(app: Router, uri: &str, cookie: &str) -> Response {
    request(app, Method::DELETE, uri, None, Some(cookie)).await
}

/// Read a response body as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
