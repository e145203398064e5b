//! Repository layer abstractions and the in-memory store.
//!
//! # Responsibility
//! - Define the use-case oriented data access contract for tasks/projects.
//! - Keep storage details behind the `TaskRepository` seam.
//!
//! # Invariants
//! - Repository APIs return semantic errors (`ProjectNotFound`,
//!   `TaskNotFound`, `IdTaken`) instead of panicking.
//! - All views are deterministic: project insertion order, then task
//!   insertion order.

pub mod task_repo;
