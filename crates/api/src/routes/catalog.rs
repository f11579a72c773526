//! Route definitions for the story/chapter catalog.
//!
//! Read-only; all endpoints require authentication.

use axum::routing::get;
use axum::Router;

use crate::handlers::catalog;
use crate::state::AppState;

/// Catalog routes, merged directly into `/api/v1`.
///
/// ```text
/// GET /stories                -> list_stories
/// GET /stories/{id}           -> get_story
/// GET /stories/{id}/chapters  -> list_chapters
/// GET /chapters/{id}          -> get_chapter
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/stories", get(catalog::list_stories))
        .route("/stories/{id}", get(catalog::get_story))
        .route("/stories/{id}/chapters", get(catalog::list_chapters))
        .route("/chapters/{id}", get(catalog::get_chapter))
}
