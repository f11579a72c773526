//! Reading-progress model and views.

use serde::Serialize;
use sqlx::FromRow;
use storyloom_core::types::{DbId, Timestamp};

/// A row from the `reading_progress` table.
///
/// The unique index on `(user_id, story_id)` guarantees at most one row per
/// pair; `updated_at` is refreshed on every upsert.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ReadingProgress {
    pub id: DbId,
    pub user_id: DbId,
    pub story_id: DbId,
    pub last_chapter_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A progress entry joined with catalog display fields, as returned by the
/// reading-history listing.
///
/// The story and chapter fields are `Option` because the catalog join is a
/// LEFT JOIN: a story or chapter deleted after progress was recorded shows
/// up with null display fields rather than dropping the entry.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ProgressView {
    pub story_id: DbId,
    pub story_title: Option<String>,
    pub story_cover_url: Option<String>,
    pub chapter_id: DbId,
    pub chapter_title: Option<String>,
    pub chapter_index: Option<i32>,
    pub updated_at: Timestamp,
}
