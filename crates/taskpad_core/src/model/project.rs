//! Project container model.
//!
//! # Responsibility
//! - Own an ordered list of tasks under one project name.
//!
//! # Invariants
//! - Task insertion order is preserved; views render tasks in the order
//!   they were added.
//! - A project owns its tasks exclusively; a task never appears in two
//!   projects.

use crate::model::task::Task;
use serde::{Deserialize, Serialize};

/// Named container of tasks, created explicitly, never auto-deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub tasks: Vec<Task>,
}

impl Project {
    /// Creates an empty project.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tasks: Vec::new(),
        }
    }
}
