use alloy::primitives::B256;
use dt2_types::EncodingError;

use crate::revert::{self, Revert};

/// Errors produced by ledger operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChainError {
    #[error("execution reverted: {0}")]
    Revert(Revert),

    #[error("transaction {tx_hash} reverted")]
    TxFailed { tx_hash: B256 },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("encoding error: {0}")]
    Encoding(#[from] EncodingError),

    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ChainResult<T> = Result<T, ChainError>;

impl ChainError {
    /// The decoded revert, if the ledger rejected the call with a reason.
    pub fn revert(&self) -> Option<&Revert> {
        match self {
            Self::Revert(revert) => Some(revert),
            _ => None,
        }
    }
}

impl From<alloy::contract::Error> for ChainError {
    fn from(error: alloy::contract::Error) -> Self {
        match revert::reason_from_contract_error(&error) {
            Some(reason) => Self::Revert(Revert::from_reason(&reason)),
            None => Self::Transport(error.to_string()),
        }
    }
}

impl From<alloy::providers::PendingTransactionError> for ChainError {
    fn from(error: alloy::providers::PendingTransactionError) -> Self {
        Self::Transport(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn revert_display_carries_reason() {
        let err = ChainError::Revert(Revert::IndexOutOfBounds);
        assert_eq!(err.to_string(), "execution reverted: Index out of bounds");
        assert_eq!(err.revert(), Some(&Revert::IndexOutOfBounds));
    }

    #[test]
    fn non_revert_has_no_reason() {
        let err = ChainError::Transport("connection refused".into());
        assert!(err.revert().is_none());
    }

    #[test]
    fn encoding_error_converts() {
        let err: ChainError = EncodingError::StringTooLong.into();
        assert!(matches!(err, ChainError::Encoding(EncodingError::StringTooLong)));
    }
}
