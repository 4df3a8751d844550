use thiserror::Error;

/// Validation and contract errors exposed by `btcinr-core`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid period '{value}', expected one of 1D, 1W, 1M, 6M, 1Y, MAX")]
    InvalidPeriod { value: String },

    #[error("field '{field}' must be positive, got {value}")]
    NonPositivePrice { field: &'static str, value: i64 },

    #[error("field '{field}' must be finite")]
    NonFiniteValue { field: &'static str },

    #[error("timestamp must be RFC3339: '{value}'")]
    InvalidTimestamp { value: String },
}

/// Top-level error type for series generation.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("date arithmetic overflowed stepping back from {now}")]
    DateOverflow { now: String },

    #[error("date out of range: {0}")]
    DateOutOfRange(#[from] time::error::ComponentRange),

    #[error("label formatting failed: {0}")]
    Format(#[from] time::error::Format),
}
