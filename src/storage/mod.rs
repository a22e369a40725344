pub mod config;

use std::path::PathBuf;

use crate::error::{Result, TodoError};

/// 获取 ~/.todo/ 目录路径（可通过 TODO_HOME 覆盖）
pub fn todo_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os("TODO_HOME").filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    dirs::home_dir()
        .map(|home| home.join(".todo"))
        .ok_or_else(|| TodoError::config("Cannot find home directory"))
}
