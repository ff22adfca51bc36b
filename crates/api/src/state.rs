use std::sync::Arc;

use aria_core::artist::ArtistStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`). The config --
/// including the token signing secret -- is read-only for the lifetime of the
/// process, so concurrent request handling needs no synchronization around it.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration (token secret, timeouts, CORS origins).
    pub config: Arc<ServerConfig>,
    /// Artist record store (in-memory here; persistence is an external
    /// collaborator behind the trait).
    pub artists: Arc<dyn ArtistStore>,
}
