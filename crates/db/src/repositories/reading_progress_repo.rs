//! Repository for the `reading_progress` table.
//!
//! The write path is a single native upsert against the
//! `uq_reading_progress_user_story` unique index, so two concurrent updates
//! for the same `(user_id, story_id)` pair are serialized by the database
//! and can never produce a duplicate row. The read path stays defensive
//! anyway: it picks one row per story by max `updated_at`, which also
//! serves any duplicate rows created before the index existed.

use sqlx::PgPool;
use storyloom_core::types::DbId;

use crate::models::reading_progress::{ProgressView, ReadingProgress};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, story_id, last_chapter_id, created_at, updated_at";

/// Columns of the joined history view.
///
/// LEFT JOINs against the catalog: a story or chapter deleted after the
/// progress row was written yields null display fields instead of dropping
/// the entry or failing the listing.
const VIEW_COLUMNS: &str = "p.story_id, s.title AS story_title, s.cover_url AS story_cover_url, \
                             p.last_chapter_id AS chapter_id, c.title AS chapter_title, \
                             c.sequence_index AS chapter_index, p.updated_at";

/// Provides upsert and history queries for reading progress.
pub struct ReadingProgressRepo;

impl ReadingProgressRepo {
    /// Record that `user_id` has read up to `chapter_id` in `story_id`.
    ///
    /// One atomic statement: inserts the first progress row for the pair, or
    /// moves the existing row's `last_chapter_id` forward and refreshes
    /// `updated_at`. Never a read-then-write sequence.
    pub async fn upsert(
        pool: &PgPool,
        user_id: DbId,
        story_id: DbId,
        chapter_id: DbId,
    ) -> Result<ReadingProgress, sqlx::Error> {
        let query = format!(
            "INSERT INTO reading_progress (user_id, story_id, last_chapter_id)
             VALUES ($1, $2, $3)
             ON CONFLICT (user_id, story_id) DO UPDATE SET
                last_chapter_id = EXCLUDED.last_chapter_id,
                updated_at = NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ReadingProgress>(&query)
            .bind(user_id)
            .bind(story_id)
            .bind(chapter_id)
            .fetch_one(pool)
            .await
    }

    /// Find the progress row for a `(user, story)` pair, if any.
    ///
    /// When duplicates exist (pre-index data), returns the representative
    /// row: max `updated_at`, larger `id` breaking ties.
    pub async fn find(
        pool: &PgPool,
        user_id: DbId,
        story_id: DbId,
    ) -> Result<Option<ReadingProgress>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM reading_progress
             WHERE user_id = $1 AND story_id = $2
             ORDER BY updated_at DESC, id DESC
             LIMIT 1"
        );
        sqlx::query_as::<_, ReadingProgress>(&query)
            .bind(user_id)
            .bind(story_id)
            .fetch_optional(pool)
            .await
    }

    /// One entry per distinct story the user has read, most recently read
    /// story first.
    ///
    /// `DISTINCT ON (story_id)` with `ORDER BY story_id, updated_at DESC,
    /// id DESC` selects the max-timestamp row per story, preferring the
    /// larger `id` when timestamps tie. The outer sort puts the newest
    /// story at the head of the list.
    pub async fn latest_per_story(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<ProgressView>, sqlx::Error> {
        let query = format!(
            "SELECT {VIEW_COLUMNS}
             FROM (
                 SELECT DISTINCT ON (story_id) id, story_id, last_chapter_id, updated_at
                 FROM reading_progress
                 WHERE user_id = $1
                 ORDER BY story_id, updated_at DESC, id DESC
             ) p
             LEFT JOIN stories s ON s.id = p.story_id
             LEFT JOIN chapters c ON c.id = p.last_chapter_id
             ORDER BY p.updated_at DESC, p.story_id DESC"
        );
        sqlx::query_as::<_, ProgressView>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// All progress entries for one `(user, story)` pair, newest first.
    ///
    /// Bypasses the one-per-story grouping; used when the history listing
    /// is filtered to a single story. Under the unique index this returns
    /// at most one entry, but legacy duplicates are listed as-is.
    pub async fn list_for_story(
        pool: &PgPool,
        user_id: DbId,
        story_id: DbId,
    ) -> Result<Vec<ProgressView>, sqlx::Error> {
        let query = format!(
            "SELECT {VIEW_COLUMNS}
             FROM reading_progress p
             LEFT JOIN stories s ON s.id = p.story_id
             LEFT JOIN chapters c ON c.id = p.last_chapter_id
             WHERE p.user_id = $1 AND p.story_id = $2
             ORDER BY p.updated_at DESC, p.id DESC"
        );
        sqlx::query_as::<_, ProgressView>(&query)
            .bind(user_id)
            .bind(story_id)
            .fetch_all(pool)
            .await
    }

    /// Count progress rows for a `(user, story)` pair.
    pub async fn count_for_pair(
        pool: &PgPool,
        user_id: DbId,
        story_id: DbId,
    ) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM reading_progress WHERE user_id = $1 AND story_id = $2",
        )
        .bind(user_id)
        .bind(story_id)
        .fetch_one(pool)
        .await?;
        Ok(count)
    }
}
