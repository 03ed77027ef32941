//! Configuration file loading.
mod loader;
mod types;

#[cfg(test)]
mod tests;

pub use loader::load_config;
pub use types::{ConfigFile, StatsConfig};

use crate::error::{AppError, AppResult, ConfigError};
use crate::stats::Statsd;

/// Loads configuration and builds the sink it describes.
///
/// # Errors
///
/// Returns an error when the config cannot be read or parsed, when it has
/// no `[stats]` section, or when the sink settings are invalid.
pub fn build_sink(path: Option<&str>) -> AppResult<Statsd> {
    let config = load_config(path)?.unwrap_or_default();
    let stats = config
        .stats
        .ok_or_else(|| AppError::config(ConfigError::MissingStatsSection))?;
    stats.build()
}
