//! run 子命令实现 - 交互式任务列表

use std::io;

use crate::error::Result;
use crate::model::TaskList;
use crate::shell::Shell;
use crate::storage::config::Config;

pub fn execute(config: &Config) -> Result<()> {
    let mut list = TaskList::new();
    let stdin = io::stdin();
    let stdout = io::stdout();

    let reason = Shell::new(stdin.lock(), stdout.lock(), config).run(&mut list)?;
    tracing::debug!(?reason, tasks = list.len(), "session finished");
    Ok(())
}
