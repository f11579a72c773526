//! Repository for the `stories` table.

use sqlx::PgPool;
use storyloom_core::types::DbId;

use crate::models::story::{CreateStory, Story};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, author_id, title, description, cover_url, is_published, created_at, updated_at";

/// Provides CRUD operations for stories.
pub struct StoryRepo;

impl StoryRepo {
    /// Insert a new story, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateStory) -> Result<Story, sqlx::Error> {
        let query = format!(
            "INSERT INTO stories (author_id, title, description, cover_url)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Story>(&query)
            .bind(input.author_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.cover_url)
            .fetch_one(pool)
            .await
    }

    /// Find a story by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Story>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM stories WHERE id = $1");
        sqlx::query_as::<_, Story>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List published stories, most recently updated first.
    pub async fn list_published(pool: &PgPool) -> Result<Vec<Story>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM stories WHERE is_published = true ORDER BY updated_at DESC"
        );
        sqlx::query_as::<_, Story>(&query).fetch_all(pool).await
    }

    /// Publish a story. Returns `true` if the row was updated.
    pub async fn publish(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE stories SET is_published = true WHERE id = $1 AND is_published = false")
                .bind(id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a story. Chapters cascade; reading-progress rows referencing
    /// it are deliberately left behind (no FK) so history listings degrade
    /// to null display fields.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM stories WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
