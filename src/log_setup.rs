//! Logging setup.

use anyhow::Result;
use log::LevelFilter;
use pretty_env_logger::formatted_builder;
use std::env;

/// Environment variable holding the log filter when `--log-level` is not passed.
pub const LOG_ENV: &str = "SUBCACHE__LOG";

// Blank values count as unset.
fn log_filter(flag: Option<&str>, env_value: Option<String>) -> Option<String> {
    flag.map(str::to_owned)
        .or(env_value)
        .map(|s| s.trim().to_owned())
        .filter(|s| !s.is_empty())
}

/// Install the global logger.
///
/// Filter is taken from `--log-level`, then [`LOG_ENV`], and falls back to
/// `info`. Fails only when a logger is already installed.
pub fn configure_logging(log_level: Option<&str>) -> Result<()> {
    let mut builder = formatted_builder();

    match log_filter(log_level, env::var(LOG_ENV).ok()) {
        Some(filter) => builder.parse_filters(&filter),
        None => builder.filter_level(LevelFilter::Info),
    };

    builder.try_init()?;

    Ok(())
}
