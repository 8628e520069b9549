//! Transaction module

use std::sync::Arc;

use crate::{ApiResult, Module, Params, Result, Session};

/// Remote action names
pub mod actions {
    /// Contract execution status (`isError`, `errDescription`)
    pub const GET_STATUS: &str = "getstatus";
    /// Receipt status (post-Byzantium)
    pub const GET_TX_RECEIPT_STATUS: &str = "gettxreceiptstatus";
}

/// Transaction endpoint group. Every action is keyed by a transaction hash.
#[derive(Debug, Clone)]
pub struct Transactions {
    module: Module,
}

impl Transactions {
    /// Create the group
    pub fn new(session: Arc<Session>) -> Self {
        Self {
            module: Module::new("transaction", session),
        }
    }

    async fn query(
        &self,
        action: &str,
        transaction_hash: &str,
        options: Params,
    ) -> Result<ApiResult> {
        let mut params = Params::new().with("txhash", transaction_hash);
        params.extend(options);
        self.module.query(action, params).await
    }

    /// Whether contract execution failed, with the error description
    pub async fn contract_execution_status(
        &self,
        transaction_hash: &str,
        options: Params,
    ) -> Result<ApiResult> {
        self.query(actions::GET_STATUS, transaction_hash, options)
            .await
    }

    /// Receipt status of the transaction
    pub async fn receipt_status(
        &self,
        transaction_hash: &str,
        options: Params,
    ) -> Result<ApiResult> {
        self.query(actions::GET_TX_RECEIPT_STATUS, transaction_hash, options)
            .await
    }
}
