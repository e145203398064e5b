//! Core domain logic for taskpad.
//! This crate is the single source of truth for business invariants.

pub mod command;
pub mod console;
pub mod logging;
pub mod model;
pub mod present;
pub mod repo;
pub mod session;

pub use command::parser::parse;
pub use command::Command;
pub use console::Console;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::project::Project;
pub use model::task::{IdAllocator, Task, TaskId, DEADLINE_FORMAT};
pub use repo::task_repo::{MemoryTaskRepository, RepoError, RepoResult, TaskRepository};
pub use session::Session;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
