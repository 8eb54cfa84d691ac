use std::sync::Arc;

use dt2_chain::{encoding, Address, Bytes, ChainError, Ledger, B256, U256};

use crate::error::{ServiceError, ServiceResult};
use crate::views::{decimal, decimals, DetailsView, NumberReply, UserView};

/// Read/write dispatch over the DataType2 contract.
///
/// Holds no field state; every call goes to the ledger. Writes block until
/// the transaction is mined, then re-read the field.
#[derive(Clone)]
pub struct FieldService {
    ledger: Arc<dyn Ledger>,
}

impl FieldService {
    pub fn new(ledger: Arc<dyn Ledger>) -> Self {
        Self { ledger }
    }

    // ---- Scalar fields ----

    /// Current message, or set it first when `new_message` is given.
    pub async fn message(&self, new_message: Option<&str>) -> ServiceResult<String> {
        if let Some(message) = new_message {
            let receipt = self.ledger.set_message(message).await?;
            tracing::info!(tx_hash = %receipt.tx_hash, "message updated");
        }
        Ok(self.ledger.get_message().await?)
    }

    /// Element at `index`, or append `value` and return the whole sequence.
    ///
    /// `index` wins when both are given; neither yields `None`.
    pub async fn number(
        &self,
        index: Option<U256>,
        value: Option<u64>,
    ) -> ServiceResult<Option<NumberReply>> {
        if let Some(index) = index {
            let element = self.ledger.get_number(index).await?;
            return Ok(Some(NumberReply::Element(decimal(element))));
        }
        if let Some(value) = value {
            let receipt = self.ledger.add_number(U256::from(value)).await?;
            tracing::info!(value, tx_hash = %receipt.tx_hash, "number appended");
            let numbers = self.ledger.get_numbers().await?;
            return Ok(Some(NumberReply::Sequence(decimals(&numbers))));
        }
        Ok(None)
    }

    pub async fn numbers(&self) -> ServiceResult<Vec<String>> {
        let numbers = self.ledger.get_numbers().await?;
        Ok(decimals(&numbers))
    }

    pub async fn add_name(&self, name: &str) -> ServiceResult<Vec<String>> {
        let receipt = self.ledger.add_name(name).await?;
        tracing::info!(tx_hash = %receipt.tx_hash, "name appended");
        Ok(self.ledger.get_names().await?)
    }

    pub async fn names(&self) -> ServiceResult<Vec<String>> {
        Ok(self.ledger.get_names().await?)
    }

    // ---- Mappings ----

    /// Balance of `address`, or set it first when `value` is given.
    pub async fn balance(&self, address: &str, value: Option<u64>) -> ServiceResult<String> {
        let account = parse_address(address)?;
        if let Some(value) = value {
            let receipt = self.ledger.set_balance(account, U256::from(value)).await?;
            tracing::info!(%account, value, tx_hash = %receipt.tx_hash, "balance updated");
        }
        let balance = self.ledger.get_balance(account).await?;
        Ok(decimal(balance))
    }

    /// Stored user of `address`; writes first when both `name` and `age`
    /// are given.
    ///
    /// A blank `name` is rejected before the ledger is touched.
    pub async fn user(
        &self,
        address: &str,
        name: Option<&str>,
        age: Option<u64>,
    ) -> ServiceResult<UserView> {
        if name.is_some_and(|n| n.trim().is_empty()) {
            return Err(ServiceError::NameCannotBeEmpty);
        }

        let account = parse_address(address)?;
        if let (Some(name), Some(age)) = (name, age) {
            let receipt = self.ledger.set_user(account, name, U256::from(age)).await?;
            tracing::info!(%account, tx_hash = %receipt.tx_hash, "user updated");
        }
        let record = self.ledger.get_user(account).await?;
        Ok(UserView::from(record))
    }

    // ---- Byte fields ----

    /// `fixedData` as hex, or write `data` first.
    ///
    /// Hex input is left-padded to 32 bytes; any other text is packed as a
    /// bytes32 string (31 bytes at most).
    pub async fn fixed_data(&self, data: Option<&str>) -> ServiceResult<String> {
        if let Some(data) = data {
            let fixed = encode_fixed(data)?;
            let receipt = self.ledger.set_fixed_data(fixed).await?;
            tracing::info!(tx_hash = %receipt.tx_hash, "fixed data updated");
        }
        let fixed = self.ledger.get_fixed_data().await?;
        Ok(encoding::to_hex(fixed.as_slice()))
    }

    /// `dynamicData` as hex, or write `data` first.
    ///
    /// Hex input is stored as the bytes it spells; any other text as UTF-8.
    pub async fn dynamic_data(&self, data: Option<&str>) -> ServiceResult<String> {
        if let Some(data) = data {
            let bytes = encode_dynamic(data)?;
            let receipt = self.ledger.set_dynamic_data(bytes).await?;
            tracing::info!(tx_hash = %receipt.tx_hash, "dynamic data updated");
        }
        let bytes = self.ledger.get_dynamic_data().await?;
        Ok(encoding::to_hex(&bytes))
    }

    // ---- Snapshot ----

    pub async fn details(&self) -> ServiceResult<DetailsView> {
        let details = self.ledger.get_details().await?;
        Ok(DetailsView::from(details))
    }

    /// Same as [`details`](Self::details). The contract has no setter that
    /// takes `state`, so it is accepted and dropped.
    pub async fn patch_details(&self, state: Option<i64>) -> ServiceResult<DetailsView> {
        if let Some(state) = state {
            tracing::debug!(state, "patch_details: state ignored");
        }
        self.details().await
    }
}

fn parse_address(address: &str) -> ServiceResult<Address> {
    address
        .trim()
        .parse()
        .map_err(|e| ChainError::InvalidAddress(format!("{address}: {e}")).into())
}

fn encode_fixed(data: &str) -> ServiceResult<B256> {
    let bytes = if encoding::is_bytes_like(data) {
        encoding::zero_pad32(&encoding::parse_hex(data)?)?
    } else {
        encoding::encode_bytes32_string(data)?
    };
    Ok(B256::from(bytes))
}

fn encode_dynamic(data: &str) -> ServiceResult<Bytes> {
    let bytes = if encoding::is_bytes_like(data) {
        encoding::parse_hex(data)?
    } else {
        encoding::utf8_bytes(data)
    };
    Ok(Bytes::from(bytes))
}
