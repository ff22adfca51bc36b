//! Artist entity model and the store seam.
//!
//! Persistence is an external collaborator: the HTTP layer only sees the
//! [`ArtistStore`] trait. [`MemoryArtistStore`] is the in-process
//! implementation used by the composition root and the test suites.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::Serialize;
use tokio::sync::RwLock;

use crate::error::CoreError;
use crate::types::{ArtistId, Timestamp};
use crate::verification::VerificationStatus;

/// Full artist record.
///
/// Contains the password hash -- NEVER serialize this to API responses
/// directly. Use [`ArtistResponse`] for external-facing output.
#[derive(Debug, Clone)]
pub struct Artist {
    pub id: ArtistId,
    pub email: String,
    pub display_name: String,
    pub password_hash: String,
    pub verification_status: VerificationStatus,
    pub is_active: bool,
    pub created_at: Timestamp,
}

/// Safe artist representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct ArtistResponse {
    pub id: ArtistId,
    pub email: String,
    pub display_name: String,
    pub verification_status: VerificationStatus,
}

impl From<&Artist> for ArtistResponse {
    fn from(artist: &Artist) -> Self {
        Self {
            id: artist.id.clone(),
            email: artist.email.clone(),
            display_name: artist.display_name.clone(),
            verification_status: artist.verification_status,
        }
    }
}

/// Read access to artist records.
///
/// The authorization layer needs lookups only; account creation and the
/// verification review workflow live with external collaborators.
#[async_trait]
pub trait ArtistStore: Send + Sync {
    /// Look up an artist by login email. `Ok(None)` when no such account.
    async fn find_by_email(&self, email: &str) -> Result<Option<Artist>, CoreError>;

    /// Look up an artist by id. `Ok(None)` when no such account.
    async fn find_by_id(&self, id: &str) -> Result<Option<Artist>, CoreError>;
}

/// In-memory [`ArtistStore`] keyed by artist id.
#[derive(Default)]
pub struct MemoryArtistStore {
    artists: RwLock<HashMap<ArtistId, Artist>>,
}

impl MemoryArtistStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an artist record.
    pub async fn upsert(&self, artist: Artist) {
        self.artists.write().await.insert(artist.id.clone(), artist);
    }
}

#[async_trait]
impl ArtistStore for MemoryArtistStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<Artist>, CoreError> {
        let artists = self.artists.read().await;
        Ok(artists.values().find(|a| a.email == email).cloned())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Artist>, CoreError> {
        Ok(self.artists.read().await.get(id).cloned())
    }
}
