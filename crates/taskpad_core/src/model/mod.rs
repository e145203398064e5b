//! Domain model for the task tracker.
//!
//! # Responsibility
//! - Define the canonical task/project records used by core business logic.
//! - Own identifier allocation state for one interactive session.
//!
//! # Invariants
//! - Every task is identified by a `TaskId` that is unique across the whole
//!   store at assignment time.
//! - Allocated ids are strictly increasing and never reused automatically;
//!   only an explicit rename may install a different id.

pub mod project;
pub mod task;
