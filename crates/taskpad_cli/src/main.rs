//! Interactive task tracker entry point.
//!
//! # Responsibility
//! - Adapt stdin/stdout to the core `Console` boundary.
//! - Resolve logging configuration from the environment and start the
//!   session with the current local date.
//!
//! # Invariants
//! - A failed logging bootstrap degrades to a stderr warning; it never
//!   blocks the interactive session.

use std::env;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use log::info;
use taskpad_core::{default_log_level, init_logging, Console, MemoryTaskRepository, Session};

const LOG_LEVEL_ENV: &str = "TASKPAD_LOG";
const LOG_DIR_ENV: &str = "TASKPAD_LOG_DIR";

/// Real console over locked stdin/stdout.
struct StdConsole {
    stdin: io::StdinLock<'static>,
    stdout: io::StdoutLock<'static>,
}

impl StdConsole {
    fn new() -> Self {
        Self {
            stdin: io::stdin().lock(),
            stdout: io::stdout().lock(),
        }
    }
}

impl Console for StdConsole {
    fn write(&mut self, text: &str) {
        // Flush so the prompt is visible before the blocking read.
        let _ = self.stdout.write_all(text.as_bytes());
        let _ = self.stdout.flush();
    }

    fn write_line(&mut self, line: &str) {
        let _ = writeln!(self.stdout, "{line}");
    }

    fn read_line(&mut self) -> Option<String> {
        let mut buffer = String::new();
        match self.stdin.read_line(&mut buffer) {
            Ok(0) | Err(_) => None,
            Ok(_) => {
                while buffer.ends_with('\n') || buffer.ends_with('\r') {
                    buffer.pop();
                }
                Some(buffer)
            }
        }
    }
}

fn resolve_log_level() -> String {
    env::var(LOG_LEVEL_ENV).unwrap_or_else(|_| default_log_level().to_string())
}

fn resolve_log_dir() -> PathBuf {
    env::var(LOG_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| env::temp_dir().join("taskpad").join("logs"))
}

fn main() {
    let level = resolve_log_level();
    let log_dir = resolve_log_dir();
    if let Err(err) = init_logging(&level, &log_dir.to_string_lossy()) {
        eprintln!("taskpad: file logging disabled: {err}");
    }

    let today = chrono::Local::now().date_naive();
    info!("event=session_start module=cli today={today}");

    let mut console = StdConsole::new();
    let mut session = Session::new(MemoryTaskRepository::new(), today);
    session.run(&mut console);
}
