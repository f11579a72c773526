pub mod auth;
pub mod catalog;
pub mod health;
pub mod progress;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                   register (public)
/// /auth/login                      login (public)
/// /auth/refresh                    refresh (public)
/// /auth/logout                     logout (requires auth)
///
/// /reading-progress                record (POST), history listing (GET)
///
/// /stories                         list published stories
/// /stories/{id}                    story detail
/// /stories/{id}/chapters           chapter listing in reading order
/// /chapters/{id}                   full chapter with body text
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/reading-progress", progress::router())
        .merge(catalog::router())
}
