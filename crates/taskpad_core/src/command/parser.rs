//! Raw line → `Command` parsing.
//!
//! # Responsibility
//! - Recognize the fixed command table, including the two-word `view by`
//!   prefixes.
//! - Keep the raw tail intact for free-text fields (descriptions), while
//!   splitting fixed-arity fields into single tokens.
//!
//! # Invariants
//! - Never panics and never returns an error; malformed lines become
//!   `Command::Unknown` and are rendered like unrecognized commands.
//! - Dates must match `dd.mm.yyyy` exactly and name a real calendar day.

use crate::command::Command;
use crate::model::task::TaskId;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

static DEADLINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{2})\.(\d{2})\.(\d{4})$").expect("valid deadline regex"));

/// Parses one input line into a command.
pub fn parse(raw: &str) -> Command {
    let line = raw.trim_end_matches(['\r', '\n']);
    let (keyword, tail) = split_keyword(line);

    match keyword {
        "view" => match tail {
            "by project" => Command::ViewByProject,
            "by deadline" => Command::ViewByDeadline,
            _ => unknown(line),
        },
        "add" => parse_add(line, tail),
        "check" => parse_single_id(line, tail, |id| Command::Check { id }),
        "uncheck" => parse_single_id(line, tail, |id| Command::Uncheck { id }),
        "delete" => parse_single_id(line, tail, |id| Command::Delete { id }),
        "deadline" => parse_deadline(line, tail),
        "id" => parse_rename(line, tail),
        "today" if tail.is_empty() => Command::Today,
        "help" if tail.is_empty() => Command::Help,
        "quit" if tail.is_empty() => Command::Quit,
        _ => unknown(line),
    }
}

fn split_keyword(line: &str) -> (&str, &str) {
    match line.split_once(' ') {
        Some((keyword, tail)) => (keyword, tail),
        None => (line, ""),
    }
}

fn unknown(line: &str) -> Command {
    Command::Unknown {
        raw: line.to_string(),
    }
}

fn parse_add(line: &str, tail: &str) -> Command {
    match tail.split_once(' ') {
        Some(("project", name)) if !name.is_empty() => Command::AddProject {
            name: name.to_string(),
        },
        Some(("task", rest)) => match rest.split_once(' ') {
            Some((project, description)) if !project.is_empty() && !description.is_empty() => {
                Command::AddTask {
                    project: project.to_string(),
                    description: description.to_string(),
                }
            }
            _ => unknown(line),
        },
        _ => unknown(line),
    }
}

fn parse_single_id(line: &str, tail: &str, build: impl FnOnce(TaskId) -> Command) -> Command {
    let mut tokens = tail.split_whitespace();
    match (tokens.next(), tokens.next()) {
        (Some(id), None) => build(TaskId::new(id)),
        _ => unknown(line),
    }
}

fn parse_deadline(line: &str, tail: &str) -> Command {
    let mut tokens = tail.split_whitespace();
    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(id), Some(date), None) => match parse_date(date) {
            Some(date) => Command::Deadline {
                id: TaskId::new(id),
                date,
            },
            None => unknown(line),
        },
        _ => unknown(line),
    }
}

fn parse_rename(line: &str, tail: &str) -> Command {
    let mut tokens = tail.split_whitespace();
    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(old), Some(new), None) => Command::Rename {
            old: TaskId::new(old),
            new: TaskId::new(new),
        },
        _ => unknown(line),
    }
}

/// Parses `dd.mm.yyyy` into a calendar date; `None` when the shape or the
/// calendar day is invalid (for example `31.02.2021`).
fn parse_date(text: &str) -> Option<NaiveDate> {
    let captures = DEADLINE_RE.captures(text)?;
    let day: u32 = captures[1].parse().ok()?;
    let month: u32 = captures[2].parse().ok()?;
    let year: i32 = captures[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}
