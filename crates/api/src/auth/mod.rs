//! Authentication primitives.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`token`] -- session token issuance and verification (HS256 JWT).

pub mod password;
pub mod token;
