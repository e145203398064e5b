//! Task record and identifier allocation.
//!
//! # Responsibility
//! - Define `Task`, its `TaskId` identifier, and the session-scoped
//!   `IdAllocator` that issues fresh ids.
//!
//! # Invariants
//! - A freshly created task starts with `done = false` and no deadline.
//! - `IdAllocator::next` is strictly increasing; the first issued id is `1`.
//! - A `TaskId` is opaque text: after a rename it may be any non-numeric
//!   token, so it must never be treated as a number outside the allocator.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Display and input format for deadlines: zero-padded day.month.year.
pub const DEADLINE_FORMAT: &str = "%d.%m.%Y";

/// Opaque textual identifier referencing one task.
///
/// Kept as a newtype so identifier text never mixes silently with other
/// strings in signatures.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Issues unique, monotonically increasing task ids for one session.
///
/// Explicit state owned by the session object, not a process-wide static,
/// so tests can run many independent sessions in one process.
#[derive(Debug, Default)]
pub struct IdAllocator {
    last: u64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the next fresh id in textual form.
    ///
    /// Pre-increments, so the first call yields `"1"`.
    pub fn next(&mut self) -> TaskId {
        self.last += 1;
        TaskId::new(self.last.to_string())
    }
}

/// One unit of work: identifier, description, completion flag and an
/// optional calendar-day deadline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub description: String,
    pub done: bool,
    /// Calendar date without time component; `None` until `deadline` is run.
    pub deadline: Option<NaiveDate>,
}

impl Task {
    /// Creates a task with defaults per the add-task command contract.
    pub fn new(id: TaskId, description: impl Into<String>) -> Self {
        Self {
            id,
            description: description.into(),
            done: false,
            deadline: None,
        }
    }

    /// Returns whether the task is due exactly on `date`.
    pub fn is_due_on(&self, date: NaiveDate) -> bool {
        self.deadline == Some(date)
    }

    /// Deadline rendered as `dd.mm.yyyy`, or `None` when unset.
    pub fn deadline_label(&self) -> Option<String> {
        self.deadline
            .map(|date| date.format(DEADLINE_FORMAT).to_string())
    }
}
