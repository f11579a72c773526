//! Route definitions for the `/reading-progress` resource.
//!
//! Both endpoints require authentication.

use axum::routing::get;
use axum::Router;

use crate::handlers::progress;
use crate::state::AppState;

/// Routes mounted at `/reading-progress`.
///
/// ```text
/// POST /  -> record_progress
/// GET  /  -> get_progress (?story_id= for a single-story listing)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(progress::get_progress).post(progress::record_progress),
    )
}
