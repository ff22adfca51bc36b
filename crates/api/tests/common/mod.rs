//! Shared helpers for HTTP-level integration tests.
//!
//! Mirrors the router construction in `main.rs` so integration tests exercise
//! the same middleware stack (CORS, request ID, timeout, tracing, panic
//! recovery) that production uses, with a fixture signing secret instead of
//! environment coupling.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
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

use aria_core::artist::{Artist, MemoryArtistStore};
use aria_core::verification::VerificationStatus;

use aria_api::auth::password::hash_password;
use aria_api::config::{AuthConfig, ServerConfig};
use aria_api::routes;
use aria_api::state::AppState;

/// Fixture token configuration shared by the app under test and any test
/// that forges tokens directly.
pub fn test_auth_config() -> AuthConfig {
    AuthConfig {
        token_secret: "integration-fixture-secret-0123456789".to_string(),
        token_ttl_mins: 60,
    }
}

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        auth: test_auth_config(),
    }
}

/// Build the full application router with all middleware layers, backed by
/// the given artist store.
pub fn build_test_app(store: Arc<MemoryArtistStore>) -> Router {
    let config = test_config();

    let state = AppState {
        config: Arc::new(config),
        artists: store,
    };

    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:5173".parse().unwrap()])
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
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

/// Insert an artist with the given id, email, password, and verification
/// status into the store. Returns the plaintext password back for login calls.
pub async fn seed_artist(
    store: &MemoryArtistStore,
    id: &str,
    email: &str,
    status: VerificationStatus,
) -> String {
    let password = "test_password_123!".to_string();
    let password_hash = hash_password(&password).expect("hashing should succeed");
    store
        .upsert(Artist {
            id: id.to_string(),
            email: email.to_string(),
            display_name: format!("{id} display name"),
            password_hash,
            verification_status: status,
            is_active: true,
            created_at: chrono::Utc::now(),
        })
        .await;
    password
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// GET the given path with no Authorization header.
pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// GET the given path with `Authorization: Bearer <token>`.
pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    get_with_header(app, uri, &format!("Bearer {token}")).await
}

/// GET the given path with a raw `Authorization` header value.
pub async fn get_with_header(app: Router, uri: &str, authorization: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::GET)
            .uri(uri)
            .header(AUTHORIZATION, authorization)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// POST a JSON body to the given path.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body should be valid JSON")
}

/// Log in via the API and return the `access_token` string.
pub async fn login_token(app: Router, email: &str, password: &str) -> String {
    let body = serde_json::json!({ "email": email, "password": password });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    json["access_token"]
        .as_str()
        .expect("login response must contain access_token")
        .to_string()
}
