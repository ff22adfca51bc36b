use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use aria_core::error::CoreError;

/// Rejection kinds produced by the bearer-token verification gate.
///
/// All three are terminal for the request: the gate never retries, and the
/// caller must obtain a fresh token out of band. They represent expected
/// client misuse, so they are logged at debug level only, never as process
/// faults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The `Authorization` header is absent or not `Bearer <token>` shaped.
    #[error("Missing or invalid Authorization header")]
    MalformedCredential,

    /// The header carried the `Bearer` scheme but no token.
    #[error("Token missing")]
    MissingToken,

    /// Signature verification failed or the token is outside its validity
    /// window.
    #[error("Invalid or expired token")]
    InvalidOrExpiredToken,
}

impl AuthError {
    /// HTTP status for this rejection kind.
    pub fn status(&self) -> StatusCode {
        match self {
            AuthError::MissingToken => StatusCode::UNAUTHORIZED,
            AuthError::MalformedCredential | AuthError::InvalidOrExpiredToken => {
                StatusCode::FORBIDDEN
            }
        }
    }
}

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`AuthError`] for gate
/// rejections. Implements [`IntoResponse`] to produce consistent JSON error
/// responses: gate rejections use the `{ "success": false, "message": ... }`
/// envelope consumed by the marketplace clients; everything else uses the
/// `{ "error", "code" }` envelope.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `aria-core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A rejection from the token verification gate.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Gate rejections short-circuit with their own envelope.
        if let AppError::Auth(auth) = &self {
            let body = json!({
                "success": false,
                "message": auth.to_string(),
            });
            return (auth.status(), axum::Json(body)).into_response();
        }

        let (status, code, message) = match &self {
            AppError::Auth(_) => unreachable!("handled above"),

            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
                CoreError::Unauthorized(msg) => {
                    (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
                }
                CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, "FORBIDDEN", msg.clone()),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
