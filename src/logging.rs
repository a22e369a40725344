//! 日志初始化
//!
//! Logs go to stderr so they never mix with the shell's own output on stdout.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::storage::config::DEFAULT_LOG_LEVEL;

/// Environment variable holding a tracing filter directive
pub const LOG_ENV: &str = "TODO_LOG";

/// Pick the filter directive: TODO_LOG, then the configured level, then "warn".
/// Blank or unparsable directives are skipped.
fn pick_directive<'a>(env_value: Option<&'a str>, config_level: Option<&'a str>) -> &'a str {
    [env_value, config_level]
        .into_iter()
        .flatten()
        .filter(|directive| !directive.trim().is_empty())
        .find(|directive| EnvFilter::try_new(directive).is_ok())
        .unwrap_or(DEFAULT_LOG_LEVEL)
}

pub fn init(config_level: Option<&str>) {
    let env_value = std::env::var(LOG_ENV).ok();
    let filter = EnvFilter::new(pick_directive(env_value.as_deref(), config_level));

    // try_init: an already-installed subscriber stays
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}
