//! Handlers for the `/auth` resource (login, session introspection).

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use validator::Validate;

use aria_core::artist::ArtistResponse;
use aria_core::error::CoreError;
use aria_core::types::ArtistId;
use aria_core::verification::{resolve_access, AccessState, VerificationStatus};

use crate::auth::password::verify_password;
use crate::auth::token::issue_session_token;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::SessionArtist;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "A valid email address is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password must not be empty"))]
    pub password: String,
}

/// Successful authentication response returned by login.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    /// Always `Bearer`; spelled out so clients do not hardcode the scheme.
    pub token_type: &'static str,
    /// Token lifetime in seconds.
    pub expires_in: i64,
    pub artist: ArtistResponse,
}

/// Session introspection payload for `GET /auth/session`.
#[derive(Debug, Serialize)]
pub struct SessionInfo {
    pub artist_id: ArtistId,
    pub display_name: String,
    /// Status as embedded in the presented token. `null` when the claim was
    /// unrecognized.
    pub verification_status: Option<VerificationStatus>,
    /// Presentation state resolved from the status above.
    pub access_state: AccessState,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/login
///
/// Authenticate with email + password. Returns a session token plus the
/// artist's public record.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

    // 1. Find the artist by email. Missing accounts get the same message as
    //    a wrong password so login probes cannot enumerate emails.
    let artist = state
        .artists
        .find_by_email(&input.email)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Invalid email or password".into()))
        })?;

    // 2. Check if the account is active.
    if !artist.is_active {
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is deactivated".into(),
        )));
    }

    // 3. Verify the password.
    let password_valid = verify_password(&input.password, &artist.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid email or password".into(),
        )));
    }

    // 4. Issue the session token.
    let access_token = issue_session_token(&artist, &state.config.auth)
        .map_err(|e| AppError::InternalError(format!("Token issuance error: {e}")))?;

    tracing::info!(artist_id = %artist.id, "Artist logged in");

    Ok(Json(AuthResponse {
        access_token,
        token_type: "Bearer",
        expires_in: state.config.auth.token_ttl_mins * 60,
        artist: ArtistResponse::from(&artist),
    }))
}

/// GET /api/v1/auth/session
///
/// Echo the decoded identity of the presented token together with its
/// resolved access state. Requires a valid session token.
pub async fn session(artist: SessionArtist) -> AppResult<Json<DataResponse<SessionInfo>>> {
    let access_state = resolve_access(artist.verification_status);

    Ok(Json(DataResponse {
        data: SessionInfo {
            artist_id: artist.artist_id,
            display_name: artist.display_name,
            verification_status: artist.verification_status,
            access_state,
        },
    }))
}
