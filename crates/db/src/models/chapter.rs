//! Chapter entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use storyloom_core::types::{DbId, Timestamp};

/// A row from the `chapters` table, without the body text.
///
/// Used for chapter listings and for the ownership check on progress
/// updates, where fetching `content_md` would be wasted bandwidth.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ChapterSummary {
    pub id: DbId,
    pub story_id: DbId,
    pub title: String,
    pub sequence_index: i32,
    pub is_published: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A full chapter row including the body text.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Chapter {
    pub id: DbId,
    pub story_id: DbId,
    pub title: String,
    pub sequence_index: i32,
    pub content_md: String,
    pub is_published: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new chapter.
#[derive(Debug, Deserialize)]
pub struct CreateChapter {
    pub story_id: DbId,
    pub title: String,
    pub sequence_index: i32,
    pub content_md: String,
}
