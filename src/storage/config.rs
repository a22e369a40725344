//! 应用配置持久化
//!
//! Only settings live on disk. Tasks are never written anywhere.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::todo_dir;
use crate::error::{Result, TodoError};

pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// 应用配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub shell: ShellConfig,
    #[serde(default)]
    pub log: LogConfig,
}

/// 显示配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// strftime-style format for dates in the task listing
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
        }
    }
}

/// 交互循环配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Print the options block before every prompt
    #[serde(default = "default_menu")]
    pub menu: bool,
}

fn default_menu() -> bool {
    true
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            menu: default_menu(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct LogConfig {
    /// tracing filter directive, e.g. "debug" or "todo=trace". TODO_LOG wins over this.
    #[serde(default)]
    pub level: Option<String>,
}

impl Config {
    /// Replace settings that cannot be used with their defaults.
    pub fn sanitized(mut self) -> Self {
        if let Err(e) = validate_date_format(&self.display.date_format) {
            tracing::warn!("{}; using {}", e, DEFAULT_DATE_FORMAT);
            self.display.date_format = default_date_format();
        }
        self
    }
}

/// 检查 strftime 格式串是否合法
pub fn validate_date_format(format: &str) -> Result<()> {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(TodoError::config(format!(
            "invalid date format '{}'",
            format
        )));
    }
    Ok(())
}

/// 获取配置文件路径
pub fn config_path() -> Result<PathBuf> {
    Ok(todo_dir()?.join("config.toml"))
}

/// Resolve the config file: an explicit path wins over ~/.todo/config.toml.
pub fn resolve_path(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => config_path(),
    }
}

/// 从指定路径读取配置（不存在则返回默认值）
///
/// The result is not sanitized; call [`Config::sanitized`] once logging is up.
pub fn read_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// 保存配置
pub fn save_config_to(path: &Path, config: &Config) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
