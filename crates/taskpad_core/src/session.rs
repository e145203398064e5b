//! Interactive session: dispatcher and run loop.
//!
//! # Responsibility
//! - Map each parsed `Command` variant to one store operation and its
//!   user-visible output.
//! - Drive the prompt/read/parse/execute loop until `quit` or end-of-input.
//!
//! # Invariants
//! - `execute` never returns an error; every domain failure prints exactly
//!   one line and leaves the store unchanged.
//! - The loop leaves the running state by checking the executed command's
//!   discriminator, never by re-inspecting input text.
//! - Diagnostic logging is metadata-only: ids and counts, no free text.

use crate::command::parser::parse;
use crate::command::Command;
use crate::console::Console;
use crate::model::task::{IdAllocator, TaskId};
use crate::present::render_groups;
use crate::repo::task_repo::{RepoError, TaskRepository};
use chrono::NaiveDate;
use log::{info, warn};

const PROMPT: &str = "> ";

const HELP_TEXT: &[&str] = &[
    "Commands:",
    "  view by project",
    "  view by deadline",
    "  add project <project name>",
    "  add task <project name> <task description>",
    "  check <task ID>",
    "  uncheck <task ID>",
    "  deadline <task ID> <dd.mm.yyyy>",
    "  today",
    "  id <old task ID> <new task ID>",
    "  delete <task ID>",
    "  help",
    "  quit",
];

/// One interactive run: owns the store, the id allocator and the fixed
/// "today" date.
///
/// The date is injected rather than read from a clock so the `today`
/// command is deterministic under test; the CLI passes the current local
/// date.
pub struct Session<R: TaskRepository> {
    repo: R,
    ids: IdAllocator,
    today: NaiveDate,
}

impl<R: TaskRepository> Session<R> {
    pub fn new(repo: R, today: NaiveDate) -> Self {
        Self {
            repo,
            ids: IdAllocator::new(),
            today,
        }
    }

    /// Runs the interactive loop: prompt, read, parse, execute.
    ///
    /// Terminates on the `quit` command or when the console reports
    /// end-of-input. Termination is absorbing; the session object can be
    /// inspected afterwards but not resumed.
    pub fn run(&mut self, console: &mut dyn Console) {
        loop {
            console.write(PROMPT);
            let Some(line) = console.read_line() else {
                info!("event=session_end module=session reason=eof");
                break;
            };

            let command = parse(&line);
            let terminate = matches!(command, Command::Quit);
            self.execute(command, console);
            if terminate {
                info!("event=session_end module=session reason=quit");
                break;
            }
        }
    }

    /// Executes one command to completion. Infallible by design: domain
    /// failures are reported to the console, not propagated.
    pub fn execute(&mut self, command: Command, console: &mut dyn Console) {
        match command {
            Command::ViewByProject => {
                render_groups(console, &self.repo.grouped_by_project());
            }
            Command::ViewByDeadline => {
                render_groups(console, &self.repo.grouped_by_deadline());
            }
            Command::AddProject { name } => {
                self.repo.add_project(&name);
                info!(
                    "event=project_added module=session name_chars={}",
                    name.len()
                );
            }
            Command::AddTask {
                project,
                description,
            } => match self.repo.add_task(&project, &description, &mut self.ids) {
                Ok(id) => {
                    info!(
                        "event=task_added module=session id={id} description_chars={}",
                        description.len()
                    );
                }
                Err(_) => {
                    warn!("event=task_add_rejected module=session reason=project_not_found");
                    console.write_line(&format!(
                        "Could not find a project with the name \"{project}\"."
                    ));
                }
            },
            Command::Check { id } => self.set_done(id, true, console),
            Command::Uncheck { id } => self.set_done(id, false, console),
            Command::Deadline { id, date } => match self.repo.set_deadline(&id, date) {
                Ok(()) => info!("event=deadline_set module=session id={id} date={date}"),
                Err(_) => {
                    warn!("event=deadline_rejected module=session reason=task_not_found");
                    console.write_line(&format!("Could not find a task with the id \"{id}\"."));
                }
            },
            Command::Today => {
                for task in self.repo.tasks_due_on(self.today) {
                    console.write_line(&task.description);
                }
                console.write_line("");
            }
            Command::Rename { old, new } => match self.repo.rename_task(&old, new.clone()) {
                Ok(()) => info!("event=task_renamed module=session old={old} new={new}"),
                Err(RepoError::IdTaken(taken)) => {
                    warn!("event=rename_rejected module=session reason=id_taken");
                    console
                        .write_line(&format!("There is already a task with the ID \"{taken}\"."));
                }
                Err(_) => {
                    warn!("event=rename_rejected module=session reason=task_not_found");
                    console.write_line(&format!("Could not find a task with the id \"{old}\"."));
                }
            },
            Command::Delete { id } => {
                self.repo.delete_task(&id);
                info!("event=task_deleted module=session id={id}");
            }
            Command::Help => {
                for line in HELP_TEXT {
                    console.write_line(line);
                }
                console.write_line("");
            }
            Command::Quit => {}
            Command::Unknown { raw } => {
                warn!(
                    "event=command_rejected module=session raw_chars={}",
                    raw.len()
                );
                console.write_line(&format!("I don't know what the command \"{raw}\" is."));
            }
        }
    }

    fn set_done(&mut self, id: TaskId, done: bool, console: &mut dyn Console) {
        match self.repo.set_done(&id, done) {
            Ok(()) => info!("event=task_toggled module=session id={id} done={done}"),
            Err(_) => {
                warn!("event=toggle_rejected module=session reason=task_not_found");
                console.write_line(&format!("Could not find a task with an ID of {id}."));
            }
        }
    }

    /// Read access for assertions and embedders; the session keeps
    /// exclusive write ownership.
    pub fn repo(&self) -> &R {
        &self.repo
    }
}
