//! Grouped task rendering.
//!
//! # Responsibility
//! - Render ordered group sequences in the fixed textual layout shared by
//!   the by-project and by-deadline views.
//!
//! # Invariants
//! - Layout is exactly `    [x] <id>: <description>` with a space in the
//!   brackets for open tasks.
//! - Every group is followed by one blank line, including empty groups.

use crate::console::Console;
use crate::model::task::Task;

/// Writes each group as a header line, its tasks, then a blank separator.
pub fn render_groups(console: &mut dyn Console, groups: &[(String, Vec<Task>)]) {
    for (header, tasks) in groups {
        console.write_line(header);
        for task in tasks {
            console.write_line(&format!(
                "    [{}] {}: {}",
                if task.done { 'x' } else { ' ' },
                task.id,
                task.description
            ));
        }
        console.write_line("");
    }
}
