//! Proxy module: Ethereum JSON-RPC calls relayed through the API
//!
//! Responses follow JSON-RPC: a `result` on success and an `error` object on failure,
//! with no `status` field. Quantities come back as hex strings.

use std::sync::Arc;

use crate::types::BlockTag;
use crate::{ApiResult, Module, Params, Result, Session};

/// Remote action names
pub mod actions {
    /// Current gas price
    pub const GAS_PRICE: &str = "eth_gasPrice";
    /// Most recent block number
    pub const BLOCK_NUMBER: &str = "eth_blockNumber";
    /// Block by number
    pub const GET_BLOCK_BY_NUMBER: &str = "eth_getBlockByNumber";
    /// Uncle by block number and index
    pub const GET_UNCLE_BY_BLOCK_NUMBER_AND_INDEX: &str = "eth_getUncleByBlockNumberAndIndex";
    /// Transaction count of a block
    pub const GET_BLOCK_TRANSACTION_COUNT_BY_NUMBER: &str =
        "eth_getBlockTransactionCountByNumber";
    /// Transaction by hash
    pub const GET_TRANSACTION_BY_HASH: &str = "eth_getTransactionByHash";
    /// Transaction by block number and index
    pub const GET_TRANSACTION_BY_BLOCK_NUMBER_AND_INDEX: &str =
        "eth_getTransactionByBlockNumberAndIndex";
    /// Nonce of an address
    pub const GET_TRANSACTION_COUNT: &str = "eth_getTransactionCount";
    /// Broadcast a signed transaction
    pub const SEND_RAW_TRANSACTION: &str = "eth_sendRawTransaction";
    /// Transaction receipt
    pub const GET_TRANSACTION_RECEIPT: &str = "eth_getTransactionReceipt";
    /// Read-only call
    pub const CALL: &str = "eth_call";
    /// Code at an address
    pub const GET_CODE: &str = "eth_getCode";
    /// Storage slot at an address
    pub const GET_STORAGE_AT: &str = "eth_getStorageAt";
    /// Gas estimate
    pub const ESTIMATE_GAS: &str = "eth_estimateGas";
}

/// Proxy endpoint group
#[derive(Debug, Clone)]
pub struct Proxy {
    module: Module,
}

fn block_tag(block: impl Into<BlockTag>) -> BlockTag {
    block.into()
}

fn index_hex(index: u64) -> String {
    format!("0x{:x}", index)
}

impl Proxy {
    /// Create the group
    pub fn new(session: Arc<Session>) -> Self {
        Self {
            module: Module::new("proxy", session),
        }
    }

    async fn query(&self, action: &str, params: Params, options: Params) -> Result<ApiResult> {
        let mut params = params;
        params.extend(options);
        self.module.query(action, params).await
    }

    /// Current gas price in wei (hex)
    pub async fn gas_price(&self) -> Result<ApiResult> {
        self.module.query(actions::GAS_PRICE, Params::new()).await
    }

    /// Number of the most recent block (hex)
    pub async fn latest_block(&self) -> Result<ApiResult> {
        self.module.query(actions::BLOCK_NUMBER, Params::new())
            .await
    }

    /// Block at `block`; pass `boolean=true` for full transaction objects
    pub async fn block_by_number(
        &self,
        block: impl Into<BlockTag>,
        options: Params,
    ) -> Result<ApiResult> {
        let params = Params::new().with("tag", block_tag(block));
        self.query(actions::GET_BLOCK_BY_NUMBER, params, options)
            .await
    }

    /// Uncle `index` of `block`
    pub async fn uncle_by_block_number_and_index(
        &self,
        block: impl Into<BlockTag>,
        index: u64,
        options: Params,
    ) -> Result<ApiResult> {
        let params = Params::new()
            .with("tag", block_tag(block))
            .with("index", index_hex(index));
        self.query(actions::GET_UNCLE_BY_BLOCK_NUMBER_AND_INDEX, params, options)
            .await
    }

    /// Number of transactions in `block`
    pub async fn transaction_count_by_block_number(
        &self,
        block: impl Into<BlockTag>,
        options: Params,
    ) -> Result<ApiResult> {
        let params = Params::new().with("tag", block_tag(block));
        self.query(actions::GET_BLOCK_TRANSACTION_COUNT_BY_NUMBER, params, options)
            .await
    }

    /// Transaction with hash `transaction_hash`
    pub async fn transaction_by_hash(
        &self,
        transaction_hash: &str,
        options: Params,
    ) -> Result<ApiResult> {
        let params = Params::new().with("txhash", transaction_hash);
        self.query(actions::GET_TRANSACTION_BY_HASH, params, options)
            .await
    }

    /// Transaction `index` of `block`
    pub async fn transaction_by_block_number_and_index(
        &self,
        block: impl Into<BlockTag>,
        index: u64,
        options: Params,
    ) -> Result<ApiResult> {
        let params = Params::new()
            .with("tag", block_tag(block))
            .with("index", index_hex(index));
        self.query(
            actions::GET_TRANSACTION_BY_BLOCK_NUMBER_AND_INDEX,
            params,
            options,
        )
        .await
    }

    /// Number of transactions sent from `address`
    pub async fn transaction_count_of_address(
        &self,
        address: &str,
        options: Params,
    ) -> Result<ApiResult> {
        let params = Params::new().with("address", address);
        self.query(actions::GET_TRANSACTION_COUNT, params, options)
            .await
    }

    /// Broadcast a signed, hex-encoded transaction
    pub async fn send_raw_transaction(&self, hex: &str, options: Params) -> Result<ApiResult> {
        let params = Params::new().with("hex", hex);
        self.query(actions::SEND_RAW_TRANSACTION, params, options)
            .await
    }

    /// Receipt of the transaction `transaction_hash`
    pub async fn receipt_by_transaction_hash(
        &self,
        transaction_hash: &str,
        options: Params,
    ) -> Result<ApiResult> {
        let params = Params::new().with("txhash", transaction_hash);
        self.query(actions::GET_TRANSACTION_RECEIPT, params, options)
            .await
    }

    /// Execute a read-only call of `data` against `address`
    pub async fn call(&self, address: &str, data: &str, options: Params) -> Result<ApiResult> {
        let params = Params::new().with("to", address).with("data", data);
        self.query(actions::CALL, params, options).await
    }

    /// Deployed code at `address`
    pub async fn code_at_address(&self, address: &str, options: Params) -> Result<ApiResult> {
        let params = Params::new().with("address", address);
        self.query(actions::GET_CODE, params, options).await
    }

    /// Storage slot `position` (hex) of `address`
    pub async fn storage_at_address(
        &self,
        address: &str,
        position: &str,
        options: Params,
    ) -> Result<ApiResult> {
        let params = Params::new()
            .with("address", address)
            .with("position", position);
        self.query(actions::GET_STORAGE_AT, params, options).await
    }

    /// Gas needed to send `value` to `address` at `gas_price` (both hex)
    pub async fn estimate_gas(
        &self,
        address: &str,
        value: &str,
        gas_price: &str,
        options: Params,
    ) -> Result<ApiResult> {
        let params = Params::new()
            .with("to", address)
            .with("value", value)
            .with("gasPrice", gas_price);
        self.query(actions::ESTIMATE_GAS, params, options).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_hex() {
        assert_eq!(index_hex(0), "0x0");
        assert_eq!(index_hex(31), "0x1f");
    }
}
