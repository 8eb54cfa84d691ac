use thiserror::Error;

/// Errors produced by encoding helpers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EncodingError {
    #[error("invalid hex string: {0}")]
    InvalidHex(String),

    #[error("value too long: at most {max} bytes, got {actual}")]
    TooLong { max: usize, actual: usize },

    #[error("bytes32 string must be less than 32 bytes")]
    StringTooLong,

    #[error("invalid bytes32 string: missing null terminator")]
    MissingNullTerminator,

    #[error("invalid UTF-8 data")]
    InvalidUtf8,
}

pub type EncodingResult<T> = Result<T, EncodingError>;
