use alloy::primitives::{Bytes, B256, U256};

/// Value stored in the contract's `users` mapping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserRecord {
    pub name: String,
    pub age: U256,
}

/// Snapshot returned by `getDetails`, one query for five fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Details {
    pub message: String,
    pub numbers: Vec<U256>,
    pub names: Vec<String>,
    pub fixed_data: B256,
    pub dynamic_data: Bytes,
}

/// Confirmation of a mined write. Callers treat it as opaque.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WriteReceipt {
    pub tx_hash: B256,
    pub block_number: Option<u64>,
}
