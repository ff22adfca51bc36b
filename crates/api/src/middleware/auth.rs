//! Bearer-token verification gate for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use aria_core::types::ArtistId;
use aria_core::verification::VerificationStatus;

use crate::auth::token::verify_session_token;
use crate::error::{AppError, AuthError};
use crate::state::AppState;

/// Authenticated artist identity extracted from a Bearer token in the
/// `Authorization` header.
///
/// This is the decoded identity the gate attaches to admitted requests. It is
/// produced once per request, read-only for downstream handlers, and never
/// persisted beyond the request's lifetime.
///
/// Use it as an extractor parameter in any handler that requires
/// authentication:
///
/// ```ignore
/// async fn my_handler(artist: SessionArtist) -> AppResult<Json<()>> {
///     tracing::info!(artist_id = %artist.artist_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct SessionArtist {
    /// The artist's id (from `claims.sub`).
    pub artist_id: ArtistId,
    /// The artist's display name (from `claims.name`).
    pub display_name: String,
    /// Verification status embedded at token issuance. `None` when the claim
    /// carried an unrecognized value, which resolves to blocked downstream.
    pub verification_status: Option<VerificationStatus>,
}

impl FromRequestParts<AppState> for SessionArtist {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Precondition 1: header present and Bearer-schemed.
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or(AuthError::MalformedCredential)?;

        let token = match auth_header.strip_prefix("Bearer ") {
            Some(rest) => rest.trim(),
            // A bare `Bearer` carries the right scheme but no token; that is
            // a missing-token rejection, not a malformed header.
            None if auth_header.trim() == "Bearer" => "",
            None => return Err(AuthError::MalformedCredential.into()),
        };

        // Precondition 2: the extracted token is non-empty.
        if token.is_empty() {
            return Err(AuthError::MissingToken.into());
        }

        // Precondition 3: signature verifies and the token is unexpired.
        // Log the rejection kind only -- never the token or its claims.
        let claims = verify_session_token(token, &state.config.auth).map_err(|e| {
            tracing::debug!(kind = ?e.kind(), "Rejected bearer token");
            AuthError::InvalidOrExpiredToken
        })?;

        let verification_status = claims.verification_status();
        Ok(SessionArtist {
            artist_id: claims.sub,
            display_name: claims.name,
            verification_status,
        })
    }
}
