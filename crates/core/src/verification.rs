//! Artist verification status and the access-state resolver.
//!
//! Every artist account carries a three-valued verification status driven by
//! an external review workflow (artist submits documents, a reviewer approves
//! or rejects). This module only *reads* that status: [`resolve_access`] maps
//! it to exactly one presentation state on every evaluation, so callers can
//! never end up rendering two contradictory views at once.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Verification status
// ---------------------------------------------------------------------------

/// Per-artist verification status.
///
/// Lifecycle (all transitions driven externally):
/// `Unverified -> Pending` when the artist submits verification materials,
/// `Pending -> Verified` on reviewer approval, `Pending -> Unverified` on
/// reviewer rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationStatus {
    Unverified,
    Pending,
    Verified,
}

impl VerificationStatus {
    /// Parse a status string as stored on an artist record or token claim.
    ///
    /// Returns `None` for anything unrecognized; callers that feed the
    /// resolver should pass the `None` straight through so the account fails
    /// closed rather than erroring out.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "unverified" => Some(Self::Unverified),
            "pending" => Some(Self::Pending),
            "verified" => Some(Self::Verified),
            _ => None,
        }
    }

    /// Convert to the wire/storage string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unverified => "unverified",
            Self::Pending => "pending",
            Self::Verified => "verified",
        }
    }
}

// ---------------------------------------------------------------------------
// Access state
// ---------------------------------------------------------------------------

/// Presentation state for an artist account, derived from
/// [`VerificationStatus`] by [`resolve_access`].
///
/// Exactly one of these applies at any evaluation:
/// - `Blocked` -- not yet verified; show the begin-verification call to
///   action and nothing gated behind verification.
/// - `Pending` -- materials submitted, review in flight; show the waiting
///   notice (distinct from `Blocked` messaging).
/// - `Granted` -- verified; show the normal dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessState {
    Blocked,
    Pending,
    Granted,
}

/// Map a verification status to its presentation state.
///
/// Total and pure: re-evaluated on every call (no caching across status
/// changes), and anything unknown or missing resolves to `Blocked`. An
/// unrecognized status must never default to `Granted`.
pub fn resolve_access(status: Option<VerificationStatus>) -> AccessState {
    match status {
        Some(VerificationStatus::Verified) => AccessState::Granted,
        Some(VerificationStatus::Pending) => AccessState::Pending,
        Some(VerificationStatus::Unverified) | None => AccessState::Blocked,
    }
}
