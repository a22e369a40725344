//! config 子命令实现

use std::io::Write;
use std::path::Path;

use clap::Subcommand;

use crate::error::{Result, TodoError};
use crate::storage::config::{self, Config};

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration as TOML
    Show,
    /// Print the config file location
    Path,
    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// 执行 config 命令
pub fn execute<W: Write>(action: &ConfigAction, explicit: Option<&Path>, out: &mut W) -> Result<()> {
    let path = config::resolve_path(explicit)?;
    match action {
        ConfigAction::Show => {
            // 显式指定的文件解析失败要报错，而不是悄悄用默认值
            let config = config::read_config(&path)?.sanitized();
            write!(out, "{}", toml::to_string_pretty(&config)?)?;
        }
        ConfigAction::Path => {
            writeln!(out, "{}", path.display())?;
        }
        ConfigAction::Init { force } => {
            if path.exists() && !force {
                return Err(TodoError::config(format!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                )));
            }
            config::save_config_to(&path, &Config::default())?;
            tracing::info!(path = %path.display(), "wrote default config");
            writeln!(out, "Wrote {}", path.display())?;
        }
    }
    Ok(())
}
