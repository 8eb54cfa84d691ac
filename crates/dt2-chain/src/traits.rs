use alloy::primitives::{Address, Bytes, B256, U256};
use async_trait::async_trait;

use crate::error::ChainResult;
use crate::records::{Details, UserRecord, WriteReceipt};

/// Read boundary: one view call per contract field. No side effects.
#[async_trait]
pub trait ContractReader: Send + Sync {
    async fn get_message(&self) -> ChainResult<String>;

    /// Reverts with `Index out of bounds` when `index >= numbers.length`.
    async fn get_number(&self, index: U256) -> ChainResult<U256>;

    async fn get_numbers(&self) -> ChainResult<Vec<U256>>;

    async fn get_names(&self) -> ChainResult<Vec<String>>;

    /// Absent accounts read as zero.
    async fn get_balance(&self, account: Address) -> ChainResult<U256>;

    /// Reverts with `User not found` for accounts never written.
    async fn get_user(&self, account: Address) -> ChainResult<UserRecord>;

    async fn get_fixed_data(&self) -> ChainResult<B256>;

    async fn get_dynamic_data(&self) -> ChainResult<Bytes>;

    async fn get_details(&self) -> ChainResult<Details>;
}

/// Write boundary: every call submits a transaction and returns only once
/// it is mined. Submissions are not deduplicated.
#[async_trait]
pub trait ContractWriter: Send + Sync {
    async fn set_message(&self, message: &str) -> ChainResult<WriteReceipt>;

    async fn add_number(&self, value: U256) -> ChainResult<WriteReceipt>;

    async fn add_name(&self, name: &str) -> ChainResult<WriteReceipt>;

    async fn set_balance(&self, account: Address, value: U256) -> ChainResult<WriteReceipt>;

    /// Reverts with `Name cannot be empty` when `name` is empty.
    async fn set_user(&self, account: Address, name: &str, age: U256)
        -> ChainResult<WriteReceipt>;

    async fn set_fixed_data(&self, data: B256) -> ChainResult<WriteReceipt>;

    async fn set_dynamic_data(&self, data: Bytes) -> ChainResult<WriteReceipt>;
}

/// A full ledger handle: both boundaries on one object.
pub trait Ledger: ContractReader + ContractWriter {}

impl<T: ContractReader + ContractWriter> Ledger for T {}
