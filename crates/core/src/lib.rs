//! Shared domain types and validation for the Storyloom backend.
//!
//! This crate is pure: no I/O, no async. It holds the types and invariant
//! checks that both the database layer and the HTTP layer depend on.

pub mod account;
pub mod error;
pub mod progress;
pub mod types;
