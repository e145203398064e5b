//! Command vocabulary and line parsing.
//!
//! # Responsibility
//! - Define the closed set of user commands as one sum type.
//! - Turn a raw input line into a `Command` without ever failing.
//!
//! # Invariants
//! - Parsing is total: any line that does not match a known shape folds
//!   into `Command::Unknown` carrying the original text.
//! - Each variant carries only the fields its execution needs.

pub mod parser;

use crate::model::task::TaskId;
use chrono::NaiveDate;

/// One fully-parsed unit of user intent, executed exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `view by project`
    ViewByProject,
    /// `view by deadline`
    ViewByDeadline,
    /// `add project <name>` — name is the rest of the line.
    AddProject { name: String },
    /// `add task <project> <description...>` — description may embed spaces.
    AddTask { project: String, description: String },
    /// `check <id>`
    Check { id: TaskId },
    /// `uncheck <id>`
    Uncheck { id: TaskId },
    /// `deadline <id> <dd.mm.yyyy>`
    Deadline { id: TaskId, date: NaiveDate },
    /// `today`
    Today,
    /// `id <old> <new>`
    Rename { old: TaskId, new: TaskId },
    /// `delete <id>`
    Delete { id: TaskId },
    /// `help`
    Help,
    /// `quit` — terminal variant; the run loop checks its discriminator.
    Quit,
    /// Anything else, including malformed arguments for known keywords.
    Unknown { raw: String },
}
