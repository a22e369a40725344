//! CLI 模块

pub mod config;
pub mod run;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "todo")]
#[command(version)]
#[command(about = "Interactive in-memory to-do list")]
pub struct Cli {
    /// Config file (defaults to ~/.todo/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the interactive task list (default)
    Run,
    /// Inspect or create the config file
    Config {
        #[command(subcommand)]
        action: config::ConfigAction,
    },
}
