use thiserror::Error;

/// Failures of the pure presentation functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PresentationError {
    /// The condition code falls outside every known bucket.
    #[error("no weather condition matches code {code}")]
    NotFound { code: i32 },

    #[error("timestamp {0} ms is outside the supported calendar range")]
    InvalidTimestamp(i64),
}

pub type PresentationResult<T> = std::result::Result<T, PresentationError>;
