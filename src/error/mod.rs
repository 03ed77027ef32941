mod app;
mod config;
mod seq;
mod stats;
mod validation;

pub use app::{AppError, AppResult};
pub use config::ConfigError;
pub use seq::SeqError;
pub use stats::StatsError;
pub use validation::ValidationError;
