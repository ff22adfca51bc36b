//! Handlers for the `/dashboard` resource.
//!
//! The dashboard handler is where the verification state resolver meets HTTP:
//! every request re-reads the artist's live status and selects exactly one of
//! the three views. The token's status snapshot is deliberately ignored here
//! so a review decision made mid-session shows up on the next evaluation.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use aria_core::artist::{Artist, ArtistResponse};
use aria_core::error::CoreError;
use aria_core::verification::{resolve_access, AccessState};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::SessionArtist;
use crate::middleware::verified::RequireVerified;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// View types
// ---------------------------------------------------------------------------

/// Exactly one dashboard view per evaluation, tagged by `view`.
#[derive(Debug, Serialize)]
#[serde(tag = "view", rename_all = "lowercase")]
pub enum DashboardView {
    /// Not yet verified: begin-verification call to action.
    Blocked {
        headline: &'static str,
        message: &'static str,
        /// Navigation target for starting verification.
        action: &'static str,
    },
    /// Submission made, review in flight: waiting notice with the expected
    /// turnaround, messaging distinct from `Blocked`.
    Pending {
        headline: &'static str,
        message: &'static str,
        /// Navigation target for viewing the (read-only) profile meanwhile.
        action: &'static str,
    },
    /// Verified: the normal dashboard payload.
    Granted { artist: ArtistResponse },
}

impl DashboardView {
    fn blocked() -> Self {
        DashboardView::Blocked {
            headline: "Verify your artist account",
            message: "Complete verification to unlock bookings and your public profile.",
            action: "/verification/start",
        }
    }

    fn pending() -> Self {
        DashboardView::Pending {
            headline: "Verification in review",
            message: "We received your documents. Review typically completes within 2 business days.",
            action: "/artist/profile",
        }
    }

    fn granted(artist: &Artist) -> Self {
        DashboardView::Granted {
            artist: ArtistResponse::from(artist),
        }
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/dashboard
///
/// Select the dashboard view for the authenticated artist from their current
/// verification status. Requires a valid session token; the view itself is
/// available in every verification state.
pub async fn dashboard(
    State(state): State<AppState>,
    artist: SessionArtist,
) -> AppResult<Json<DataResponse<DashboardView>>> {
    // Re-read the live status on every evaluation; never cache across a
    // status change.
    let record = state.artists.find_by_id(&artist.artist_id).await?;

    let view = match &record {
        Some(a) => match resolve_access(Some(a.verification_status)) {
            AccessState::Granted => DashboardView::granted(a),
            AccessState::Pending => DashboardView::pending(),
            AccessState::Blocked => DashboardView::blocked(),
        },
        // Account gone since the token was issued: fail closed.
        None => DashboardView::blocked(),
    };

    Ok(Json(DataResponse { data: view }))
}

/// GET /api/v1/dashboard/profile
///
/// The gated profile view. Only reachable with a `verified` session.
pub async fn profile(
    State(state): State<AppState>,
    RequireVerified(artist): RequireVerified,
) -> AppResult<Json<DataResponse<ArtistResponse>>> {
    let record = state
        .artists
        .find_by_id(&artist.artist_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Artist",
                id: artist.artist_id.clone(),
            })
        })?;

    Ok(Json(DataResponse {
        data: ArtistResponse::from(&record),
    }))
}
