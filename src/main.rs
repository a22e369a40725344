mod cli;
mod error;
mod logging;
mod model;
mod operations;
mod shell;
mod storage;

use std::io;
use std::process::ExitCode;

use clap::Parser;

use cli::{Cli, Commands};
use error::Result;
use storage::config::{self, Config};

/// Load the config and bring up logging.
///
/// The raw file is read before the subscriber exists (its log level decides the
/// filter); problems with it are reported once logging is up.
fn bootstrap(cli: &Cli) -> Config {
    let raw = config::resolve_path(cli.config.as_deref()).and_then(|path| config::read_config(&path));

    let level = raw.as_ref().ok().and_then(|c| c.log.level.clone());
    logging::init(level.as_deref());

    match raw {
        Ok(config) => config.sanitized(),
        Err(e) => {
            tracing::warn!("failed to load config, using defaults: {}", e);
            Config::default()
        }
    }
}

fn dispatch(cli: &Cli, config: &Config) -> Result<()> {
    match &cli.command {
        None | Some(Commands::Run) => cli::run::execute(config),
        Some(Commands::Config { action }) => {
            cli::config::execute(action, cli.config.as_deref(), &mut io::stdout().lock())
        }
    }
}

fn main() -> ExitCode {
    // 解析命令行参数
    let cli = Cli::parse();
    let config = bootstrap(&cli);

    // 统一调度
    match dispatch(&cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
