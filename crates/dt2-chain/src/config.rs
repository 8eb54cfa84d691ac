use std::fmt;

use alloy::primitives::Address;
use serde::{Deserialize, Serialize};

use crate::error::{ChainError, ChainResult};

/// Environment variable naming the JSON-RPC endpoint.
pub const ENV_RPC_URL: &str = "RPC_URL";
/// Environment variable holding the hex-encoded signing key.
pub const ENV_PRIVATE_KEY: &str = "PRIVATE_KEY";
/// Environment variable holding the deployed contract address.
pub const ENV_CONTRACT_ADDRESS: &str = "CONTRACT_ADDRESS";

/// Connection settings for the ledger.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainConfig {
    pub rpc_url: String,
    pub private_key: SecretKey,
    pub contract_address: String,
}

impl ChainConfig {
    /// Overlay values found through `lookup` (normally `std::env::var`).
    pub fn apply_env_with<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_RPC_URL) {
            self.rpc_url = url;
        }
        if let Some(key) = lookup(ENV_PRIVATE_KEY) {
            self.private_key = SecretKey::new(key);
        }
        if let Some(address) = lookup(ENV_CONTRACT_ADDRESS) {
            self.contract_address = address;
        }
    }

    /// Check that every field needed to connect is present and parses.
    pub fn validate(&self) -> ChainResult<()> {
        if self.rpc_url.trim().is_empty() {
            return Err(ChainError::Config(format!("{ENV_RPC_URL} is not set")));
        }
        if self.private_key.is_empty() {
            return Err(ChainError::Config(format!("{ENV_PRIVATE_KEY} is not set")));
        }
        self.contract_address()?;
        Ok(())
    }

    pub fn contract_address(&self) -> ChainResult<Address> {
        if self.contract_address.trim().is_empty() {
            return Err(ChainError::Config(format!(
                "{ENV_CONTRACT_ADDRESS} is not set"
            )));
        }
        self.contract_address
            .trim()
            .parse()
            .map_err(|e| ChainError::InvalidAddress(format!("{}: {e}", self.contract_address)))
    }
}

/// A signing key that never prints.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SecretKey(String);

impl SecretKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// The raw key material. Keep the borrow short.
    pub fn expose(&self) -> &str {
        self.0.trim()
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "SecretKey(<unset>)")
        } else {
            write!(f, "SecretKey(<redacted>)")
        }
    }
}
