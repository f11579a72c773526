//! Repository for the `chapters` table.

use sqlx::PgPool;
use storyloom_core::types::DbId;

use crate::models::chapter::{Chapter, ChapterSummary, CreateChapter};

/// Column list for full chapter rows.
const COLUMNS: &str = "id, story_id, title, sequence_index, content_md, is_published, \
                        created_at, updated_at";

/// Column list for listings and lookups that do not need the body text.
const SUMMARY_COLUMNS: &str =
    "id, story_id, title, sequence_index, is_published, created_at, updated_at";

/// Provides CRUD operations for chapters.
pub struct ChapterRepo;

impl ChapterRepo {
    /// Insert a new chapter, returning the created row.
    ///
    /// Surfaces the `uq_chapters_story_sequence` unique violation unchanged
    /// so the API layer can map it to 409.
    pub async fn create(pool: &PgPool, input: &CreateChapter) -> Result<Chapter, sqlx::Error> {
        let query = format!(
            "INSERT INTO chapters (story_id, title, sequence_index, content_md)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Chapter>(&query)
            .bind(input.story_id)
            .bind(&input.title)
            .bind(input.sequence_index)
            .bind(&input.content_md)
            .fetch_one(pool)
            .await
    }

    /// Find a full chapter (including body text) by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Chapter>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM chapters WHERE id = $1");
        sqlx::query_as::<_, Chapter>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a chapter summary (no body text) by ID.
    ///
    /// The progress write path uses this for the ownership check, where the
    /// only field of interest is `story_id`.
    pub async fn find_summary_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ChapterSummary>, sqlx::Error> {
        let query = format!("SELECT {SUMMARY_COLUMNS} FROM chapters WHERE id = $1");
        sqlx::query_as::<_, ChapterSummary>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a story's chapters in reading order.
    pub async fn list_for_story(
        pool: &PgPool,
        story_id: DbId,
    ) -> Result<Vec<ChapterSummary>, sqlx::Error> {
        let query = format!(
            "SELECT {SUMMARY_COLUMNS} FROM chapters
             WHERE story_id = $1
             ORDER BY sequence_index ASC"
        );
        sqlx::query_as::<_, ChapterSummary>(&query)
            .bind(story_id)
            .fetch_all(pool)
            .await
    }

    /// Delete a chapter. Reading-progress rows referencing it remain and
    /// degrade to null display fields in history listings.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM chapters WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
