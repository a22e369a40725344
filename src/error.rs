//! 统一错误类型定义
//!
//! 使用 `thiserror` 库提供统一的错误处理，支持错误链式传播。

use std::io;
use thiserror::Error;

/// Todo 错误类型
#[derive(Debug, Error)]
pub enum TodoError {
    /// 添加空任务名
    #[error("Task cannot be empty.")]
    EmptyTaskName,

    /// 按名称删除时没有匹配的任务
    #[error("Task '{0}' not found.")]
    TaskNotFound(String),

    /// I/O 错误（终端读写、配置文件等）
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// 配置错误
    #[error("Config error: {0}")]
    Config(String),

    /// TOML 解析错误
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// TOML 序列化错误
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

/// Todo Result 类型别名
pub type Result<T> = std::result::Result<T, TodoError>;

impl TodoError {
    /// 创建 TaskNotFound 错误
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::TaskNotFound(name.into())
    }

    /// 创建 Config 错误
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(TodoError::EmptyTaskName.to_string(), "Task cannot be empty.");

        let err = TodoError::not_found("Buy eggs");
        assert_eq!(err.to_string(), "Task 'Buy eggs' not found.");

        let err = TodoError::config("bad date format");
        assert_eq!(err.to_string(), "Config error: bad date format");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed");
        let err: TodoError = io_err.into();
        assert!(matches!(err, TodoError::Io(_)));
    }
}
