use dt2_chain::{ChainError, Revert};
use dt2_types::EncodingError;
use thiserror::Error;

/// Failures surfaced to callers of the field service.
///
/// The display text of the first three variants is the machine-matchable
/// message clients see.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("Index out of bounds")]
    IndexOutOfBounds,

    #[error("Name cannot be empty")]
    NameCannotBeEmpty,

    #[error("User not found")]
    UserNotFound,

    #[error("{0}")]
    BadRequest(String),
}

impl ServiceError {
    /// HTTP status the error is reported with. Every service failure is a
    /// client error.
    pub fn status_code(&self) -> u16 {
        400
    }
}

impl From<ChainError> for ServiceError {
    fn from(error: ChainError) -> Self {
        match error.revert() {
            Some(Revert::IndexOutOfBounds) => Self::IndexOutOfBounds,
            Some(Revert::UserNotFound) => Self::UserNotFound,
            Some(Revert::NameCannotBeEmpty) => Self::NameCannotBeEmpty,
            _ => Self::BadRequest(error.to_string()),
        }
    }
}

impl From<EncodingError> for ServiceError {
    fn from(error: EncodingError) -> Self {
        ChainError::from(error).into()
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
