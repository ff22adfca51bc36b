//! Domain types for the Aria artist marketplace backend.
//!
//! This crate holds everything the HTTP layer and future workers share:
//! common type aliases, the domain error type, the artist record and store
//! seam, and the verification state machine that decides what an artist
//! account may see.

pub mod artist;
pub mod error;
pub mod types;
pub mod verification;
