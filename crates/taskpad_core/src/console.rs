//! Console boundary contract.
//!
//! # Responsibility
//! - Define the seam between the core and whatever supplies/consumes text
//!   lines (real terminal, scripted test double).
//!
//! # Invariants
//! - `read_line` returns lines without their terminator and `None` at
//!   end-of-input.
//! - `write` emits no newline; it exists for the prompt.

/// Line-oriented text boundary used by the session.
pub trait Console {
    /// Writes text without a trailing newline and makes it visible
    /// immediately (the prompt must appear before the read blocks).
    fn write(&mut self, text: &str);

    /// Writes one full output line.
    fn write_line(&mut self, line: &str);

    /// Blocks for the next input line; `None` means end-of-input.
    fn read_line(&mut self) -> Option<String>;
}
