//! Buffered counter recording with pluggable textual file backends.
mod record;
mod sink;
mod writer;


pub use record::MetricRecord;
pub use sink::{DEFAULT_BUFFER_LIMIT, Statsd};
pub use writer::{CSV_DELIMITER, CSV_HEADER, StatsFormat, StatsWriter};
