//! Session token issuance and verification.
//!
//! Session tokens are HS256-signed JWTs containing a [`SessionClaims`]
//! payload. A token is immutable once issued: there is no update or refresh
//! operation, only issuance at login and expiry. Verification is a pure
//! function of the token, the configured secret, and the clock -- it makes no
//! outbound calls and holds no state, so the same token verified twice under
//! the same clock yields the same outcome.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use aria_core::artist::Artist;
use aria_core::types::ArtistId;
use aria_core::verification::VerificationStatus;

use crate::config::AuthConfig;

/// Claims embedded in every session token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SessionClaims {
    /// Subject -- the artist's id (e.g. `artist-42`).
    pub sub: ArtistId,
    /// The artist's display name, for client-side greeting without a
    /// follow-up lookup.
    pub name: String,
    /// Verification status string as of issuance (`unverified` | `pending` |
    /// `verified`). Downstream consumers re-read the live status where
    /// staleness matters; this claim is a snapshot.
    pub status: String,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
    /// Unique token identifier (UUID v4) for audit correlation.
    pub jti: String,
}

impl SessionClaims {
    /// Parse the embedded verification status claim.
    ///
    /// `None` for anything unrecognized, which the resolver treats as
    /// blocked. A tampered or stale status string therefore fails closed.
    pub fn verification_status(&self) -> Option<VerificationStatus> {
        VerificationStatus::parse(&self.status)
    }
}

/// Issue an HS256 session token for the given artist.
///
/// Issuance contract: the token carries the artist id as subject, the display
/// name, the verification status at issuance, the issue time, an expiry of
/// issue time plus the configured TTL, and a unique `jti`.
pub fn issue_session_token(
    artist: &Artist,
    config: &AuthConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now().timestamp();
    let exp = now + config.token_ttl_mins * 60;

    let claims = SessionClaims {
        sub: artist.id.clone(),
        name: artist.display_name.clone(),
        status: artist.verification_status.as_str().to_string(),
        exp,
        iat: now,
        jti: Uuid::new_v4().to_string(),
    };

    encode(
        &Header::default(), // HS256
        &claims,
        &EncodingKey::from_secret(config.token_secret.as_bytes()),
    )
}

/// Clock skew tolerance for the `iat` lower bound, matching the default
/// leeway `Validation` applies to `exp`.
const IAT_LEEWAY_SECS: i64 = 60;

/// Verify a session token and return the embedded [`SessionClaims`].
///
/// Validates the signature against the configured secret and both ends of
/// the validity window: a token is valid iff the signature verifies and
/// `iat <= now <= exp`. A valid signature with a past `exp` is as dead as a
/// bad signature, and a token dated in the future is just as dead.
pub fn verify_session_token(
    token: &str,
    config: &AuthConfig,
) -> Result<SessionClaims, jsonwebtoken::errors::Error> {
    let token_data = decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(config.token_secret.as_bytes()),
        &Validation::default(), // HS256, validates exp
    )?;

    // `Validation::default()` checks `exp` only; enforce the lower bound of
    // the validity window ourselves, with the same leeway.
    let now = chrono::Utc::now().timestamp();
    if token_data.claims.iat > now + IAT_LEEWAY_SECS {
        return Err(jsonwebtoken::errors::ErrorKind::ImmatureSignature.into());
    }

    Ok(token_data.claims)
}
