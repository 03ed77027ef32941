use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::stats::{StatsFormat, StatsWriter, Statsd};
use crate::types::PositiveUsize;

#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    pub stats: Option<StatsConfig>,
}

/// Sink settings from the `[stats]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct StatsConfig {
    pub path: String,
    /// Explicit backend; when absent the path extension decides.
    pub format: Option<StatsFormat>,
    /// Flush threshold; defaults to 10 when absent.
    pub buffer_limit: Option<usize>,
}

impl StatsConfig {
    /// Builds a ready sink from this section.
    ///
    /// # Errors
    ///
    /// Returns an error when the path extension does not select or match
    /// a backend, or when `buffer_limit` is zero.
    pub fn build(&self) -> AppResult<Statsd> {
        let writer = match self.format {
            Some(StatsFormat::Csv) => StatsWriter::csv(self.path.as_str())?,
            Some(StatsFormat::Txt) => StatsWriter::txt(self.path.as_str())?,
            None => StatsWriter::for_path(self.path.as_str())?,
        };
        match self.buffer_limit {
            Some(limit) => {
                let limit = PositiveUsize::try_from(limit).map_err(AppError::validation)?;
                Ok(Statsd::new(writer, limit))
            }
            None => Ok(Statsd::with_default_limit(writer)),
        }
    }
}
