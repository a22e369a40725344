//! Core task operations used by the interactive shell
//!
//! ## Design
//!
//! - `TaskList` reports failures as `TodoError`; this layer folds the
//!   recoverable ones into a `Status` so the shell never has to match on errors.
//! - Printing is the caller's job. `Status` implements `Display` with the exact
//!   text shown to the user.
//!
//! ```text
//! shell (src/shell) ──> operations::tasks (this module) ──> model::TaskList
//! ```

use std::fmt::{self, Write as _};

use chrono::NaiveDate;

use crate::error::TodoError;
use crate::model::{Clock, TaskList};

/// One rendered line of the task listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingRow {
    pub index: usize,
    pub date: String,
    pub name: String,
}

/// Outcome of a task operation
#[derive(Debug)]
pub enum Status {
    Added { name: String },
    Deleted { name: String },
    /// The list was left unchanged
    Failed(TodoError),
    NoTasks,
    Listing(Vec<ListingRow>),
}

impl Status {
    pub fn is_error(&self) -> bool {
        matches!(self, Status::Failed(_))
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Added { name } => write!(f, "Task '{}' added successfully.", name),
            Status::Deleted { name } => write!(f, "Task '{}' deleted successfully.", name),
            Status::Failed(err) => write!(f, "{}", err),
            Status::NoTasks => write!(f, "No tasks available."),
            Status::Listing(rows) => {
                write!(f, "To-Do List:")?;
                for row in rows {
                    write!(f, "\n{}. {} {}", row.index, row.date, row.name)?;
                }
                Ok(())
            }
        }
    }
}

/// Add a task
pub fn add_task<C: Clock>(list: &mut TaskList<C>, name: &str) -> Status {
    match list.add(name) {
        Ok(task) => Status::Added {
            name: task.name().to_string(),
        },
        Err(e) => Status::Failed(e),
    }
}

/// Delete the first task named `name`
pub fn delete_task<C: Clock>(list: &mut TaskList<C>, name: &str) -> Status {
    match list.delete(name) {
        Ok(task) => Status::Deleted {
            name: task.name().to_string(),
        },
        Err(e) => Status::Failed(e),
    }
}

/// List every task, dates rendered with `date_format` (strftime syntax)
pub fn show_tasks<C: Clock>(list: &TaskList<C>, date_format: &str) -> Status {
    let listing = list.show();
    if listing.is_empty() {
        return Status::NoTasks;
    }

    let rows = listing
        .entries
        .iter()
        .map(|entry| ListingRow {
            index: entry.index,
            date: format_date(entry.date_created, date_format),
            name: entry.name.to_string(),
        })
        .collect();
    Status::Listing(rows)
}

/// 按 strftime 格式渲染日期，格式非法时退回 ISO 格式
pub fn format_date(date: NaiveDate, date_format: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", date.format(date_format)).is_err() {
        tracing::warn!(date_format, "invalid date format, using ISO 8601");
        return date.to_string();
    }
    out
}
