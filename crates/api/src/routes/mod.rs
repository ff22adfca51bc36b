pub mod auth;
pub mod dashboard;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login           login (public)
/// /auth/session         session introspection (requires auth)
///
/// /dashboard            verification-state dashboard view (requires auth)
/// /dashboard/profile    gated profile view (requires verified account)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/dashboard", dashboard::router())
}
