//! Task operations - the layer between the interactive shell and the task list
//!
//! Each operation runs one `TaskList` call and turns its outcome into a
//! `Status` the caller prints.

pub mod tasks;
