use alloy::network::{Ethereum, EthereumWallet, ReceiptResponse};
use alloy::primitives::{Address, Bytes, B256, U256};
use alloy::providers::{DynProvider, PendingTransactionBuilder, Provider, ProviderBuilder};
use alloy::signers::local::PrivateKeySigner;
use alloy::transports::http::reqwest::Url;
use async_trait::async_trait;

use crate::config::ChainConfig;
use crate::contract::DataType2::{self, DataType2Instance};
use crate::error::{ChainError, ChainResult};
use crate::records::{Details, UserRecord, WriteReceipt};
use crate::traits::{ContractReader, ContractWriter};

/// DataType2 client over JSON-RPC, signing with a local private key.
///
/// Built once at startup and shared; holds the only contract handle.
pub struct RpcLedger {
    contract: DataType2Instance<DynProvider>,
    signer: Address,
}

impl RpcLedger {
    /// Build the provider, wallet, and contract handle from `config`.
    ///
    /// No network round trip happens here; a bad endpoint surfaces on the
    /// first call.
    pub fn connect(config: &ChainConfig) -> ChainResult<Self> {
        config.validate()?;

        let url: Url = config
            .rpc_url
            .trim()
            .parse()
            .map_err(|e| ChainError::Config(format!("invalid rpc url '{}': {e}", config.rpc_url)))?;
        let signer: PrivateKeySigner = config
            .private_key
            .expose()
            .parse()
            .map_err(|e| ChainError::Config(format!("invalid private key: {e}")))?;
        let signer_address = signer.address();
        let address = config.contract_address()?;

        let provider = ProviderBuilder::new()
            .wallet(EthereumWallet::from(signer))
            .connect_http(url)
            .erased();

        tracing::info!(contract = %address, signer = %signer_address, "ledger client ready");
        Ok(Self {
            contract: DataType2::new(address, provider),
            signer: signer_address,
        })
    }

    pub fn contract_address(&self) -> Address {
        *self.contract.address()
    }

    pub fn signer_address(&self) -> Address {
        self.signer
    }
}

/// Wait for a submitted transaction to be mined and check its status.
async fn confirm(
    call: &'static str,
    pending: PendingTransactionBuilder<Ethereum>,
) -> ChainResult<WriteReceipt> {
    tracing::debug!(call, tx_hash = %pending.tx_hash(), "transaction submitted");
    let receipt = pending.get_receipt().await?;
    let tx_hash = receipt.transaction_hash();
    if !receipt.status() {
        return Err(ChainError::TxFailed { tx_hash });
    }
    Ok(WriteReceipt {
        tx_hash,
        block_number: receipt.block_number(),
    })
}

#[async_trait]
impl ContractReader for RpcLedger {
    async fn get_message(&self) -> ChainResult<String> {
        Ok(self.contract.getMessage().call().await?)
    }

    async fn get_number(&self, index: U256) -> ChainResult<U256> {
        Ok(self.contract.getNumber(index).call().await?)
    }

    async fn get_numbers(&self) -> ChainResult<Vec<U256>> {
        Ok(self.contract.getNumbers().call().await?)
    }

    async fn get_names(&self) -> ChainResult<Vec<String>> {
        Ok(self.contract.getNames().call().await?)
    }

    async fn get_balance(&self, account: Address) -> ChainResult<U256> {
        Ok(self.contract.getBalance(account).call().await?)
    }

    async fn get_user(&self, account: Address) -> ChainResult<UserRecord> {
        let user = self.contract.getUser(account).call().await?;
        Ok(UserRecord {
            name: user.name,
            age: user.age,
        })
    }

    async fn get_fixed_data(&self) -> ChainResult<B256> {
        Ok(self.contract.getFixedData().call().await?)
    }

    async fn get_dynamic_data(&self) -> ChainResult<Bytes> {
        Ok(self.contract.getDynamicData().call().await?)
    }

    async fn get_details(&self) -> ChainResult<Details> {
        let details = self.contract.getDetails().call().await?;
        Ok(Details {
            message: details.message,
            numbers: details.numbers,
            names: details.names,
            fixed_data: details.fixedData,
            dynamic_data: details.dynamicData,
        })
    }
}

#[async_trait]
impl ContractWriter for RpcLedger {
    async fn set_message(&self, message: &str) -> ChainResult<WriteReceipt> {
        let pending = self.contract.setMessage(message.to_string()).send().await?;
        confirm("setMessage", pending).await
    }

    async fn add_number(&self, value: U256) -> ChainResult<WriteReceipt> {
        let pending = self.contract.addNumber(value).send().await?;
        confirm("addNumber", pending).await
    }

    async fn add_name(&self, name: &str) -> ChainResult<WriteReceipt> {
        let pending = self.contract.addName(name.to_string()).send().await?;
        confirm("addName", pending).await
    }

    async fn set_balance(&self, account: Address, value: U256) -> ChainResult<WriteReceipt> {
        let pending = self.contract.setBalance(account, value).send().await?;
        confirm("setBalance", pending).await
    }

    async fn set_user(
        &self,
        account: Address,
        name: &str,
        age: U256,
    ) -> ChainResult<WriteReceipt> {
        let pending = self
            .contract
            .setUser(account, name.to_string(), age)
            .send()
            .await?;
        confirm("setUser", pending).await
    }

    async fn set_fixed_data(&self, data: B256) -> ChainResult<WriteReceipt> {
        let pending = self.contract.setFixedData(data).send().await?;
        confirm("setFixedData", pending).await
    }

    async fn set_dynamic_data(&self, data: Bytes) -> ChainResult<WriteReceipt> {
        let pending = self.contract.setDynamicData(data).send().await?;
        confirm("setDynamicData", pending).await
    }
}
