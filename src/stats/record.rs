use chrono::Utc;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

/// One buffered counter observation. Immutable once created.
///
/// All fields are kept in their on-disk textual form: the timestamp is
/// ISO-8601 UTC with a numeric offset and the value is a signed integer
/// rendered as a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricRecord {
    pub date: String,
    pub metric: String,
    pub value: String,
}

impl MetricRecord {
    /// Creates a record stamped with the current UTC time.
    #[must_use]
    pub fn now(metric: impl Into<String>, value: i64) -> Self {
        Self {
            date: Utc::now().format(TIMESTAMP_FORMAT).to_string(),
            metric: metric.into(),
            value: value.to_string(),
        }
    }
}
