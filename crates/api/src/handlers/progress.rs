//! Handlers for the `/reading-progress` resource.
//!
//! The write path validates the request at the boundary, checks that the
//! chapter exists and belongs to the named story, then hands off to the
//! single atomic upsert in [`ReadingProgressRepo`]. The read path returns
//! one entry per story (latest first), or the ungrouped entries for one
//! story when a `story_id` filter is supplied.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use storyloom_core::error::CoreError;
use storyloom_core::progress::{validate_chapter_ownership, validate_progress_ids};
use storyloom_core::types::DbId;
use storyloom_db::repositories::{ChapterRepo, ReadingProgressRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / query types
// ---------------------------------------------------------------------------

/// Request body for `POST /reading-progress`.
///
/// Fields are `Option` so an absent field reports `MISSING_FIELDS` instead
/// of a deserialization error with no stable code.
#[derive(Debug, Deserialize)]
pub struct RecordProgressRequest {
    pub story_id: Option<DbId>,
    pub chapter_id: Option<DbId>,
}

/// Query parameters for `GET /reading-progress`.
#[derive(Debug, Deserialize)]
pub struct ProgressQuery {
    /// When present, bypass the one-entry-per-story grouping and list the
    /// entries for this story only.
    pub story_id: Option<DbId>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/reading-progress
///
/// Record that the authenticated user has read up to a chapter. Returns
/// 204 No Content; the write is fire-and-forget from the client's view.
pub async fn record_progress(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<RecordProgressRequest>,
) -> AppResult<StatusCode> {
    let (story_id, chapter_id) = match (input.story_id, input.chapter_id) {
        (Some(story_id), Some(chapter_id)) => (story_id, chapter_id),
        (story_id, chapter_id) => {
            let mut missing = Vec::new();
            if story_id.is_none() {
                missing.push("story_id");
            }
            if chapter_id.is_none() {
                missing.push("chapter_id");
            }
            return Err(AppError::MissingFields(format!(
                "Required fields missing: {}",
                missing.join(", ")
            )));
        }
    };

    validate_progress_ids(auth.user_id, story_id, chapter_id).map_err(CoreError::Validation)?;

    // The chapter must exist and belong to the story named in the request.
    // The chapter's FK to stories also proves the story exists.
    let chapter = ChapterRepo::find_summary_by_id(&state.pool, chapter_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Chapter",
            id: chapter_id,
        })?;
    validate_chapter_ownership(story_id, chapter_id, chapter.story_id)
        .map_err(CoreError::Validation)?;

    ReadingProgressRepo::upsert(&state.pool, auth.user_id, story_id, chapter_id).await?;

    tracing::info!(
        user_id = auth.user_id,
        story_id,
        chapter_id,
        "Recorded reading progress"
    );

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/reading-progress
///
/// List the authenticated user's reading history, most recently read story
/// first, one entry per story. `?story_id=` narrows to one story without
/// grouping. A user with no history gets an empty list.
pub async fn get_progress(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<ProgressQuery>,
) -> AppResult<Json<serde_json::Value>> {
    let entries = match params.story_id {
        Some(story_id) => {
            ReadingProgressRepo::list_for_story(&state.pool, auth.user_id, story_id).await?
        }
        None => ReadingProgressRepo::latest_per_story(&state.pool, auth.user_id).await?,
    };

    Ok(Json(serde_json::json!({ "data": entries })))
}
