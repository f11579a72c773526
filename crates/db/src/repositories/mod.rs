//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod chapter_repo;
pub mod reading_progress_repo;
pub mod session_repo;
pub mod story_repo;
pub mod user_repo;

pub use chapter_repo::ChapterRepo;
pub use reading_progress_repo::ReadingProgressRepo;
pub use session_repo::SessionRepo;
pub use story_repo::StoryRepo;
pub use user_repo::UserRepo;
