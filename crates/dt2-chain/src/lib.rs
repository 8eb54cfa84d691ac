//! Chain client adapter for the DataType2 contract.
//!
//! This crate owns everything that talks to the ledger:
//! - `ContractReader` / `ContractWriter` trait boundaries, one call per field
//! - `RpcLedger`, the alloy JSON-RPC implementation with a local signer
//! - `InMemoryLedger`, the contract's semantics in process for tests and demos
//! - `Revert` decoding so callers match on variants instead of reason text
//! - Re-exports of the `dt2-types` encoding helpers

pub mod config;
pub mod contract;
pub mod error;
pub mod memory;
pub mod records;
pub mod revert;
pub mod rpc;
pub mod traits;

pub use alloy::primitives::{Address, Bytes, B256, U256};
pub use config::{ChainConfig, SecretKey};
pub use dt2_types::encoding;
pub use error::{ChainError, ChainResult};
pub use memory::InMemoryLedger;
pub use records::{Details, UserRecord, WriteReceipt};
pub use revert::Revert;
pub use rpc::RpcLedger;
pub use traits::{ContractReader, ContractWriter, Ledger};
