//! Tests for `AppError` → HTTP response mapping.
//!
//! These tests verify that each `AppError` variant produces the correct HTTP
//! status code and body envelope. They do NOT need an HTTP server -- they
//! call `IntoResponse` directly on `AppError` values.

use axum::response::IntoResponse;
use http_body_util::BodyExt;

use aria_core::error::CoreError;
use aria_api::error::{AppError, AuthError};

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (axum::http::StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

// ---------------------------------------------------------------------------
// Gate rejections use the { success, message } envelope
// ---------------------------------------------------------------------------

#[tokio::test]
async fn malformed_credential_returns_403_gate_envelope() {
    let err = AppError::Auth(AuthError::MalformedCredential);

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::FORBIDDEN);
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Missing or invalid Authorization header");
    assert!(json.get("code").is_none(), "gate envelope has no code field");
}

#[tokio::test]
async fn missing_token_returns_401_gate_envelope() {
    let err = AppError::Auth(AuthError::MissingToken);

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::UNAUTHORIZED);
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Token missing");
}

#[tokio::test]
async fn invalid_or_expired_token_returns_403_gate_envelope() {
    let err = AppError::Auth(AuthError::InvalidOrExpiredToken);

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::FORBIDDEN);
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Invalid or expired token");
}

/// The three rejection kinds carry three distinct messages.
#[tokio::test]
async fn gate_rejection_messages_are_distinct() {
    let (_, malformed) = error_to_response(AppError::Auth(AuthError::MalformedCredential)).await;
    let (_, missing) = error_to_response(AppError::Auth(AuthError::MissingToken)).await;
    let (_, invalid) = error_to_response(AppError::Auth(AuthError::InvalidOrExpiredToken)).await;

    assert_ne!(malformed["message"], missing["message"]);
    assert_ne!(missing["message"], invalid["message"]);
    assert_ne!(malformed["message"], invalid["message"]);
}

// ---------------------------------------------------------------------------
// Domain errors use the { error, code } envelope
// ---------------------------------------------------------------------------

#[tokio::test]
async fn not_found_error_returns_404() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "Artist",
        id: "artist-42".to_string(),
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Artist with id artist-42 not found");
}

#[tokio::test]
async fn unauthorized_error_returns_401() {
    let err = AppError::Core(CoreError::Unauthorized("Invalid email or password".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::UNAUTHORIZED);
    assert_eq!(json["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn forbidden_error_returns_403() {
    let err = AppError::Core(CoreError::Forbidden("Verified artist account required".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::FORBIDDEN);
    assert_eq!(json["code"], "FORBIDDEN");
}

#[tokio::test]
async fn validation_error_returns_400() {
    let err = AppError::Core(CoreError::Validation("A valid email address is required".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn internal_error_returns_500_and_sanitizes_message() {
    let err = AppError::InternalError("secret signing key material leaked".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");

    // The response body must NOT contain the original error details.
    let body_text = json.to_string();
    assert!(
        !body_text.contains("secret"),
        "Internal error response must not leak sensitive details"
    );
    assert_eq!(json["error"], "An internal error occurred");
}
