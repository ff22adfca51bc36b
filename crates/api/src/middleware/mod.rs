//! Authorization middleware extractors.
//!
//! - [`auth::SessionArtist`] -- the bearer-token verification gate; extracts
//!   the authenticated artist from the `Authorization` header.
//! - [`verified::RequireVerified`] -- requires a `verified` artist account on
//!   top of a valid session.

pub mod auth;
pub mod verified;
