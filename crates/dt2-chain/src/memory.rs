use std::collections::HashMap;
use std::sync::RwLock;

use alloy::primitives::{keccak256, Address, Bytes, B256, U256};
use async_trait::async_trait;

use crate::error::{ChainError, ChainResult};
use crate::records::{Details, UserRecord, WriteReceipt};
use crate::revert::Revert;
use crate::traits::{ContractReader, ContractWriter};

/// Value of `message` at deployment.
pub const INITIAL_MESSAGE: &str = "Hello, Solidity!";

/// Value of `fixedData` at deployment.
pub const INITIAL_FIXED_DATA: B256 = B256::new([
    0xab, 0xcd, 0xef, 0x12, 0x34, 0x56, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0,
]);

/// In-memory DataType2 contract for tests, local demos, and embedding.
///
/// Every write is "mined" immediately into its own block.
pub struct InMemoryLedger {
    inner: RwLock<ContractState>,
}

struct ContractState {
    message: String,
    numbers: Vec<U256>,
    names: Vec<String>,
    balances: HashMap<Address, U256>,
    users: HashMap<Address, UserRecord>,
    fixed_data: B256,
    dynamic_data: Bytes,
    block_number: u64,
}

impl Default for ContractState {
    fn default() -> Self {
        Self {
            message: INITIAL_MESSAGE.to_string(),
            numbers: Vec::new(),
            names: Vec::new(),
            balances: HashMap::new(),
            users: HashMap::new(),
            fixed_data: INITIAL_FIXED_DATA,
            dynamic_data: Bytes::new(),
            block_number: 0,
        }
    }
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(ContractState::default()),
        }
    }

    /// Number of writes confirmed so far.
    pub fn block_number(&self) -> ChainResult<u64> {
        self.read(|state| Ok(state.block_number))
    }

    fn read<T>(&self, f: impl FnOnce(&ContractState) -> ChainResult<T>) -> ChainResult<T> {
        let state = self
            .inner
            .read()
            .map_err(|_| ChainError::Internal("ledger read lock poisoned".into()))?;
        f(&state)
    }

    /// Apply `f` atomically; a revert leaves the state untouched.
    fn transact(
        &self,
        call: &'static str,
        f: impl FnOnce(&mut ContractState) -> ChainResult<()>,
    ) -> ChainResult<WriteReceipt> {
        let mut state = self
            .inner
            .write()
            .map_err(|_| ChainError::Internal("ledger write lock poisoned".into()))?;

        f(&mut state)?;

        state.block_number += 1;
        let mut preimage = call.as_bytes().to_vec();
        preimage.extend_from_slice(&state.block_number.to_be_bytes());
        let receipt = WriteReceipt {
            tx_hash: keccak256(&preimage),
            block_number: Some(state.block_number),
        };
        tracing::debug!(call, block = state.block_number, "in-memory write applied");
        Ok(receipt)
    }
}

impl Default for InMemoryLedger {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContractReader for InMemoryLedger {
    async fn get_message(&self) -> ChainResult<String> {
        self.read(|state| Ok(state.message.clone()))
    }

    async fn get_number(&self, index: U256) -> ChainResult<U256> {
        self.read(|state| {
            usize::try_from(index)
                .ok()
                .and_then(|i| state.numbers.get(i))
                .copied()
                .ok_or(ChainError::Revert(Revert::IndexOutOfBounds))
        })
    }

    async fn get_numbers(&self) -> ChainResult<Vec<U256>> {
        self.read(|state| Ok(state.numbers.clone()))
    }

    async fn get_names(&self) -> ChainResult<Vec<String>> {
        self.read(|state| Ok(state.names.clone()))
    }

    async fn get_balance(&self, account: Address) -> ChainResult<U256> {
        self.read(|state| Ok(state.balances.get(&account).copied().unwrap_or_default()))
    }

    async fn get_user(&self, account: Address) -> ChainResult<UserRecord> {
        self.read(|state| {
            state
                .users
                .get(&account)
                .filter(|user| !user.name.is_empty())
                .cloned()
                .ok_or(ChainError::Revert(Revert::UserNotFound))
        })
    }

    async fn get_fixed_data(&self) -> ChainResult<B256> {
        self.read(|state| Ok(state.fixed_data))
    }

    async fn get_dynamic_data(&self) -> ChainResult<Bytes> {
        self.read(|state| Ok(state.dynamic_data.clone()))
    }

    async fn get_details(&self) -> ChainResult<Details> {
        self.read(|state| {
            Ok(Details {
                message: state.message.clone(),
                numbers: state.numbers.clone(),
                names: state.names.clone(),
                fixed_data: state.fixed_data,
                dynamic_data: state.dynamic_data.clone(),
            })
        })
    }
}

#[async_trait]
impl ContractWriter for InMemoryLedger {
    async fn set_message(&self, message: &str) -> ChainResult<WriteReceipt> {
        self.transact("setMessage", |state| {
            state.message = message.to_string();
            Ok(())
        })
    }

    async fn add_number(&self, value: U256) -> ChainResult<WriteReceipt> {
        self.transact("addNumber", |state| {
            state.numbers.push(value);
            Ok(())
        })
    }

    async fn add_name(&self, name: &str) -> ChainResult<WriteReceipt> {
        self.transact("addName", |state| {
            state.names.push(name.to_string());
            Ok(())
        })
    }

    async fn set_balance(&self, account: Address, value: U256) -> ChainResult<WriteReceipt> {
        self.transact("setBalance", |state| {
            state.balances.insert(account, value);
            Ok(())
        })
    }

    async fn set_user(
        &self,
        account: Address,
        name: &str,
        age: U256,
    ) -> ChainResult<WriteReceipt> {
        self.transact("setUser", |state| {
            if name.is_empty() {
                return Err(ChainError::Revert(Revert::NameCannotBeEmpty));
            }
            state.users.insert(
                account,
                UserRecord {
                    name: name.to_string(),
                    age,
                },
            );
            Ok(())
        })
    }

    async fn set_fixed_data(&self, data: B256) -> ChainResult<WriteReceipt> {
        self.transact("setFixedData", |state| {
            state.fixed_data = data;
            Ok(())
        })
    }

    async fn set_dynamic_data(&self, data: Bytes) -> ChainResult<WriteReceipt> {
        self.transact("setDynamicData", |state| {
            state.dynamic_data = data;
            Ok(())
        })
    }
}
