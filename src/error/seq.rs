use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeqError {
    #[error("Batch size must be >= 1.")]
    ChunkSizeZero,
    #[error("Cannot cycle an empty source.")]
    EmptySource,
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
