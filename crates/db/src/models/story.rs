//! Story entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use storyloom_core::types::{DbId, Timestamp};

/// A row from the `stories` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Story {
    pub id: DbId,
    pub author_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub cover_url: Option<String>,
    pub is_published: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new story.
#[derive(Debug, Deserialize)]
pub struct CreateStory {
    pub author_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub cover_url: Option<String>,
}
