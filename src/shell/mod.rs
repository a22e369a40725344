//! 交互式命令循环
//!
//! A thin loop around the task operations: print the menu, read a choice,
//! run the matching operation and print its status. Input and output are
//! generic so the whole loop can be driven from a test.

pub mod menu;

use std::io::{BufRead, Write};

use crate::error::Result;
use crate::model::{Clock, TaskList};
use crate::operations::tasks::{add_task, delete_task, show_tasks};
use crate::storage::config::Config;

pub use menu::MenuChoice;

const CHOICE_PROMPT: &str = "Choose an option (1-4): ";
const ADD_PROMPT: &str = "Enter the task: ";
const DELETE_PROMPT: &str = "Enter the task to delete: ";
const EXIT_MESSAGE: &str = "Exiting the application.";
const INVALID_CHOICE: &str = "Invalid choice. Please try again.";

/// Why the loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// User picked Quit
    Quit,
    /// Input closed
    EndOfInput,
}

pub struct Shell<R, W> {
    input: R,
    output: W,
    date_format: String,
    show_menu: bool,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, config: &Config) -> Self {
        Self {
            input,
            output,
            date_format: config.display.date_format.clone(),
            show_menu: config.shell.menu,
        }
    }

    /// Run until the user quits or input ends.
    pub fn run<C: Clock>(&mut self, list: &mut TaskList<C>) -> Result<ExitReason> {
        loop {
            if self.show_menu {
                write!(self.output, "{}", menu::render_options())?;
            }
            let Some(line) = self.prompt(CHOICE_PROMPT)? else {
                return Ok(self.end_of_input());
            };

            let status = match MenuChoice::parse(&line) {
                Some(MenuChoice::Add) => {
                    let Some(name) = self.prompt(ADD_PROMPT)? else {
                        return Ok(self.end_of_input());
                    };
                    add_task(list, &name)
                }
                Some(MenuChoice::Delete) => {
                    let Some(name) = self.prompt(DELETE_PROMPT)? else {
                        return Ok(self.end_of_input());
                    };
                    delete_task(list, &name)
                }
                Some(MenuChoice::Show) => show_tasks(list, &self.date_format),
                Some(MenuChoice::Quit) => {
                    writeln!(self.output, "{}", EXIT_MESSAGE)?;
                    self.output.flush()?;
                    return Ok(ExitReason::Quit);
                }
                None => {
                    tracing::debug!(choice = %line, "unrecognized menu choice");
                    writeln!(self.output, "{}", INVALID_CHOICE)?;
                    continue;
                }
            };

            if status.is_error() {
                tracing::info!("{}", status);
            }
            writeln!(self.output, "{}", status)?;
        }
    }

    /// Print `prompt` and read one line. `None` means input is closed.
    fn prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        read_line(&mut self.input)
    }

    fn end_of_input(&mut self) -> ExitReason {
        // 光标停在提示符后，补一个换行
        let _ = writeln!(self.output);
        let _ = self.output.flush();
        tracing::debug!("input closed, leaving shell");
        ExitReason::EndOfInput
    }
}

/// Read one line without its terminator. Everything else, whitespace included, is kept.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(Some(line))
}

// ============================================================================
// Tests
// ============================================================================
