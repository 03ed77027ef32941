use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StatsError {
    #[error("Stats path '{path}' must have a '.{expected}' extension.")]
    ExtensionMismatch {
        expected: &'static str,
        path: PathBuf,
    },
    #[error("Unsupported stats extension '{ext}'. Use .csv or .txt.")]
    UnsupportedExtension { ext: String },
    #[error("Stats path must have a .csv or .txt extension.")]
    MissingExtension,
    #[error("Failed to format stats line: {source}")]
    FormatLine {
        #[source]
        source: std::fmt::Error,
    },
    #[error("I/O error during {context}: {source}")]
    Io {
        context: &'static str,
        #[source]
        source: std::io::Error,
    },
    #[cfg(test)]
    #[error("Test expectation failed: {message}")]
    TestExpectation { message: &'static str },
    #[cfg(test)]
    #[error("Test expectation failed: {message}: {value}")]
    TestExpectationValue {
        message: &'static str,
        value: String,
    },
}
