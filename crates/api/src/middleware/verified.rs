//! Verified-account extractor.
//!
//! Wraps [`SessionArtist`] and rejects sessions whose resolved access state
//! is anything but granted. Use it in route handlers to enforce the
//! verification requirement at the type level.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use aria_core::error::CoreError;
use aria_core::verification::{resolve_access, AccessState};

use super::auth::SessionArtist;
use crate::error::AppError;
use crate::state::AppState;

/// Requires a `verified` artist account. Rejects with 403 Forbidden otherwise.
///
/// ```ignore
/// async fn verified_only(RequireVerified(artist): RequireVerified) -> AppResult<Json<()>> {
///     // artist is guaranteed to be verified here
///     Ok(Json(()))
/// }
/// ```
pub struct RequireVerified(pub SessionArtist);

impl FromRequestParts<AppState> for RequireVerified {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let artist = SessionArtist::from_request_parts(parts, state).await?;
        if resolve_access(artist.verification_status) != AccessState::Granted {
            return Err(AppError::Core(CoreError::Forbidden(
                "Verified artist account required".into(),
            )));
        }
        Ok(RequireVerified(artist))
    }
}
