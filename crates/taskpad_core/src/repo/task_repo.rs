//! Task repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide insertion, lookup, mutation and grouped-view APIs over the
//!   projects/tasks store.
//!
//! # Invariants
//! - Lookup by id is global: it scans all projects in insertion order and
//!   binds to the first match.
//! - `rename_task` rejects a new id that already names a task; global
//!   lookup-by-id stays unambiguous.
//! - Grouped views use explicit ordered key+bucket sequences, never a
//!   hashing container's iteration order.

use crate::model::project::Project;
use crate::model::task::{IdAllocator, Task, TaskId};
use chrono::NaiveDate;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Result type used by repository operations.
pub type RepoResult<T> = Result<T, RepoError>;

/// Semantic errors for store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    /// Referenced project name has no matching project.
    ProjectNotFound(String),
    /// Referenced identifier matches no task.
    TaskNotFound(TaskId),
    /// Rename target id already names a task.
    IdTaken(TaskId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ProjectNotFound(name) => write!(f, "project not found: {name}"),
            Self::TaskNotFound(id) => write!(f, "task not found: {id}"),
            Self::IdTaken(id) => write!(f, "task id already in use: {id}"),
        }
    }
}

impl Error for RepoError {}

/// Repository interface for the projects/tasks store.
pub trait TaskRepository {
    /// Appends a new empty project. Duplicate names are permitted; lookups
    /// bind to the first match.
    fn add_project(&mut self, name: &str);

    /// First project matching `name`, or `None`.
    fn find_project(&self, name: &str) -> Option<&Project>;

    /// Creates a task with a freshly allocated id and appends it to the
    /// named project.
    ///
    /// # Errors
    /// - `ProjectNotFound` when no project matches; no id is consumed.
    fn add_task(
        &mut self,
        project: &str,
        description: &str,
        ids: &mut IdAllocator,
    ) -> RepoResult<TaskId>;

    /// First task with the given id, scanning project-then-task insertion
    /// order, or `None`.
    fn find_task(&self, id: &TaskId) -> Option<&Task>;

    /// Sets the done flag of the identified task.
    fn set_done(&mut self, id: &TaskId, done: bool) -> RepoResult<()>;

    /// Sets the deadline of the identified task.
    fn set_deadline(&mut self, id: &TaskId, date: NaiveDate) -> RepoResult<()>;

    /// Reassigns a task's id.
    ///
    /// # Errors
    /// - `TaskNotFound` when `old` names no task.
    /// - `IdTaken` when `new` already names a task; the store is unchanged.
    fn rename_task(&mut self, old: &TaskId, new: TaskId) -> RepoResult<()>;

    /// Removes the first task with the given id. Silent no-op when absent.
    fn delete_task(&mut self, id: &TaskId);

    /// Flattened view across all projects, project order then task order.
    fn all_tasks(&self) -> Vec<Task>;

    /// Tasks whose deadline equals `date` exactly.
    fn tasks_due_on(&self, date: NaiveDate) -> Vec<Task>;

    /// Ordered project-name → tasks view, including empty projects.
    fn grouped_by_project(&self) -> Vec<(String, Vec<Task>)>;

    /// Ordered formatted-deadline → tasks view. Tasks without a deadline
    /// are excluded; keys appear in first-encountered scan order.
    fn grouped_by_deadline(&self) -> Vec<(String, Vec<Task>)>;
}

/// Process-memory store. State lives only for the session; there is no
/// persistence.
#[derive(Debug, Default)]
pub struct MemoryTaskRepository {
    projects: Vec<Project>,
}

impl MemoryTaskRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn task_mut(&mut self, id: &TaskId) -> Option<&mut Task> {
        self.projects
            .iter_mut()
            .flat_map(|project| project.tasks.iter_mut())
            .find(|task| &task.id == id)
    }
}

impl TaskRepository for MemoryTaskRepository {
    fn add_project(&mut self, name: &str) {
        self.projects.push(Project::new(name));
    }

    fn find_project(&self, name: &str) -> Option<&Project> {
        self.projects.iter().find(|project| project.name == name)
    }

    fn add_task(
        &mut self,
        project: &str,
        description: &str,
        ids: &mut IdAllocator,
    ) -> RepoResult<TaskId> {
        let slot = self
            .projects
            .iter_mut()
            .find(|candidate| candidate.name == project)
            .ok_or_else(|| RepoError::ProjectNotFound(project.to_string()))?;

        let id = ids.next();
        slot.tasks.push(Task::new(id.clone(), description));
        Ok(id)
    }

    fn find_task(&self, id: &TaskId) -> Option<&Task> {
        self.projects
            .iter()
            .flat_map(|project| project.tasks.iter())
            .find(|task| &task.id == id)
    }

    fn set_done(&mut self, id: &TaskId, done: bool) -> RepoResult<()> {
        let task = self
            .task_mut(id)
            .ok_or_else(|| RepoError::TaskNotFound(id.clone()))?;
        task.done = done;
        Ok(())
    }

    fn set_deadline(&mut self, id: &TaskId, date: NaiveDate) -> RepoResult<()> {
        let task = self
            .task_mut(id)
            .ok_or_else(|| RepoError::TaskNotFound(id.clone()))?;
        task.deadline = Some(date);
        Ok(())
    }

    fn rename_task(&mut self, old: &TaskId, new: TaskId) -> RepoResult<()> {
        if self.find_task(old).is_none() {
            return Err(RepoError::TaskNotFound(old.clone()));
        }
        if self.find_task(&new).is_some() {
            return Err(RepoError::IdTaken(new));
        }

        // `old` was verified present above.
        if let Some(task) = self.task_mut(old) {
            task.id = new;
        }
        Ok(())
    }

    fn delete_task(&mut self, id: &TaskId) {
        for project in &mut self.projects {
            if let Some(index) = project.tasks.iter().position(|task| &task.id == id) {
                project.tasks.remove(index);
                return;
            }
        }
    }

    fn all_tasks(&self) -> Vec<Task> {
        self.projects
            .iter()
            .flat_map(|project| project.tasks.iter().cloned())
            .collect()
    }

    fn tasks_due_on(&self, date: NaiveDate) -> Vec<Task> {
        self.all_tasks()
            .into_iter()
            .filter(|task| task.is_due_on(date))
            .collect()
    }

    fn grouped_by_project(&self) -> Vec<(String, Vec<Task>)> {
        self.projects
            .iter()
            .map(|project| (project.name.clone(), project.tasks.clone()))
            .collect()
    }

    fn grouped_by_deadline(&self) -> Vec<(String, Vec<Task>)> {
        let mut groups: Vec<(String, Vec<Task>)> = Vec::new();
        for task in self.all_tasks() {
            let Some(label) = task.deadline_label() else {
                continue;
            };
            match groups.iter_mut().find(|(key, _)| *key == label) {
                Some((_, bucket)) => bucket.push(task),
                None => groups.push((label, vec![task])),
            }
        }
        groups
    }
}
