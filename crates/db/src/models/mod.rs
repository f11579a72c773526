//! `FromRow` models and DTOs, one module per table.

pub mod chapter;
pub mod reading_progress;
pub mod session;
pub mod story;
pub mod user;
