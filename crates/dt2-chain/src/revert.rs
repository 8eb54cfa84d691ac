use std::fmt;

use alloy::sol_types::{Revert as SolRevert, SolError};

/// A contract-level rejection, decoded from its `Error(string)` reason.
///
/// The reasons the DataType2 contract emits get their own variant; anything
/// else is kept verbatim in `Other`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Revert {
    IndexOutOfBounds,
    UserNotFound,
    NameCannotBeEmpty,
    Other(String),
}

impl Revert {
    pub const INDEX_OUT_OF_BOUNDS: &'static str = "Index out of bounds";
    pub const USER_NOT_FOUND: &'static str = "User not found";
    pub const NAME_CANNOT_BE_EMPTY: &'static str = "Name cannot be empty";

    /// Classify a reason string. Only exact matches map to known variants.
    pub fn from_reason(reason: &str) -> Self {
        match reason {
            Self::INDEX_OUT_OF_BOUNDS => Self::IndexOutOfBounds,
            Self::USER_NOT_FOUND => Self::UserNotFound,
            Self::NAME_CANNOT_BE_EMPTY => Self::NameCannotBeEmpty,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn reason(&self) -> &str {
        match self {
            Self::IndexOutOfBounds => Self::INDEX_OUT_OF_BOUNDS,
            Self::UserNotFound => Self::USER_NOT_FOUND,
            Self::NameCannotBeEmpty => Self::NAME_CANNOT_BE_EMPTY,
            Self::Other(reason) => reason,
        }
    }
}

impl fmt::Display for Revert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.reason())
    }
}

/// Pull the revert reason out of a node's error message.
///
/// Handles the geth-style `execution reverted: <reason>` and the hardhat-style
/// `reverted with reason string '<reason>'` forms.
pub fn reason_from_message(message: &str) -> Option<String> {
    const HARDHAT: &str = "reverted with reason string '";
    const GETH: &str = "execution reverted: ";

    if let Some(start) = message.find(HARDHAT) {
        let rest = &message[start + HARDHAT.len()..];
        let end = rest.rfind('\'')?;
        return Some(rest[..end].to_string());
    }
    if let Some(start) = message.find(GETH) {
        let reason = message[start + GETH.len()..].trim();
        if !reason.is_empty() {
            return Some(reason.to_string());
        }
    }
    None
}

/// Revert reason carried by an RPC error response, preferring ABI-encoded
/// revert data over the message text.
pub(crate) fn reason_from_contract_error(error: &alloy::contract::Error) -> Option<String> {
    let alloy::contract::Error::TransportError(transport) = error else {
        return None;
    };
    let payload = transport.as_error_resp()?;
    if let Some(data) = payload.as_revert_data() {
        if let Ok(decoded) = SolRevert::abi_decode(&data) {
            return Some(decoded.reason);
        }
    }
    reason_from_message(&payload.message)
}
