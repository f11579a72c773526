//! Validation for reading-progress updates.
//!
//! A progress update is the triple `(user_id, story_id, chapter_id)`. The
//! store keeps at most one row per `(user_id, story_id)`; these checks reject
//! malformed input before it reaches the database.

use crate::types::DbId;

/// Validate the identifier triple of a progress update.
///
/// Ids come from BIGSERIAL columns, so anything non-positive can never
/// reference a real row.
pub fn validate_progress_ids(
    user_id: DbId,
    story_id: DbId,
    chapter_id: DbId,
) -> Result<(), String> {
    for (name, id) in [
        ("user_id", user_id),
        ("story_id", story_id),
        ("chapter_id", chapter_id),
    ] {
        if id <= 0 {
            return Err(format!("{name} must be a positive id, got {id}"));
        }
    }
    Ok(())
}

/// Check that a chapter belongs to the story a progress update names.
///
/// `chapter_story_id` is the `story_id` column of the chapter row the caller
/// supplied. Both ids arrive in the same request, so a mismatch means the
/// client composed an inconsistent update.
pub fn validate_chapter_ownership(
    story_id: DbId,
    chapter_id: DbId,
    chapter_story_id: DbId,
) -> Result<(), String> {
    if chapter_story_id != story_id {
        return Err(format!(
            "Chapter {chapter_id} belongs to story {chapter_story_id}, not story {story_id}"
        ));
    }
    Ok(())
}
