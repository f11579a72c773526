//! Handlers for the read-only story/chapter catalog.
//!
//! The catalog is a collaborator of the progress component: these endpoints
//! serve story and chapter lookups, and the progress listing joins display
//! fields from the same tables.

use axum::extract::{Path, State};
use axum::Json;
use storyloom_core::error::CoreError;
use storyloom_core::types::DbId;
use storyloom_db::models::chapter::{Chapter, ChapterSummary};
use storyloom_db::models::story::Story;
use storyloom_db::repositories::{ChapterRepo, StoryRepo};

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/v1/stories
///
/// List published stories, most recently updated first.
pub async fn list_stories(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<serde_json::Value>> {
    let stories = StoryRepo::list_published(&state.pool).await?;
    Ok(Json(serde_json::json!({ "data": stories })))
}

/// GET /api/v1/stories/{id}
pub async fn get_story(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(story_id): Path<DbId>,
) -> AppResult<Json<Story>> {
    let story = StoryRepo::find_by_id(&state.pool, story_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Story",
            id: story_id,
        })?;
    Ok(Json(story))
}

/// GET /api/v1/stories/{id}/chapters
///
/// List a story's chapters in reading order. 404 if the story is unknown.
pub async fn list_chapters(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(story_id): Path<DbId>,
) -> AppResult<Json<serde_json::Value>> {
    StoryRepo::find_by_id(&state.pool, story_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Story",
            id: story_id,
        })?;

    let chapters: Vec<ChapterSummary> = ChapterRepo::list_for_story(&state.pool, story_id).await?;
    Ok(Json(serde_json::json!({ "data": chapters })))
}

/// GET /api/v1/chapters/{id}
///
/// Fetch a full chapter including its body text.
pub async fn get_chapter(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(chapter_id): Path<DbId>,
) -> AppResult<Json<Chapter>> {
    let chapter = ChapterRepo::find_by_id(&state.pool, chapter_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Chapter",
            id: chapter_id,
        })?;
    Ok(Json(chapter))
}
