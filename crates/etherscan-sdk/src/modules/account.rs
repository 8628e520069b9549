//! Account module: balances and per-address histories
//!
//! See <https://etherscan.io/apis#accounts> for the optional parameters each action
//! accepts (`startblock`, `endblock`, `page`, `offset`, `sort`, `tag`, ...).

use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::Value;

use crate::{ApiResult, EtherscanError, Module, Params, Result, Session};

/// Remote action names
pub mod actions {
    /// Balance of a single address
    pub const BALANCE: &str = "balance";
    /// Balances of several addresses
    pub const BALANCE_MULTI: &str = "balancemulti";
    /// Normal transactions
    pub const TX_LIST: &str = "txlist";
    /// Internal transactions
    pub const TX_LIST_INTERNAL: &str = "txlistinternal";
    /// ERC-20 transfer events
    pub const TOKEN_TX: &str = "tokentx";
    /// Blocks validated by an address
    pub const MINED_BLOCKS: &str = "getminedblock";
}

/// Balance per address, in wei as returned by the API
pub type Balances = BTreeMap<String, String>;

/// Account endpoint group
#[derive(Debug, Clone)]
pub struct Account {
    module: Module,
    address: Option<String>,
}

impl Account {
    /// Create the group; `address` backs the convenience accessors.
    /// A blank address counts as not configured.
    pub fn new(session: Arc<Session>, address: Option<String>) -> Self {
        Self {
            module: Module::new("account", session),
            address: address.filter(|a| !a.trim().is_empty()),
        }
    }

    /// Default address, if configured
    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    fn default_address(&self) -> Result<&str> {
        self.address
            .as_deref()
            .ok_or(EtherscanError::NotSet("Account.address"))
    }

    async fn query(&self, action: &str, address: &str, options: Params) -> Result<ApiResult> {
        let mut params = Params::new().with("address", address);
        params.extend(options);
        self.module.query(action, params).await
    }

    // ==================== Default-address accessors ====================

    /// Balance of the default address
    pub async fn balance(&self) -> Result<Balances> {
        let address = self.default_address()?;
        self.address_balances(&[address], Params::new()).await
    }

    /// Normal transactions of the default address
    pub async fn transactions(&self) -> Result<ApiResult> {
        let address = self.default_address()?;
        self.transactions_by_address(address, Params::new()).await
    }

    /// Internal transactions of the default address
    pub async fn internal_transactions(&self) -> Result<ApiResult> {
        let address = self.default_address()?;
        self.internal_transactions_by_address(address, Params::new())
            .await
    }

    /// ERC-20 transfer events of the default address
    pub async fn token_transfer_events(&self) -> Result<ApiResult> {
        let address = self.default_address()?;
        self.token_transfer_events_by_address(address, Params::new())
            .await
    }

    /// Blocks mined by the default address
    pub async fn blocks_mined(&self) -> Result<ApiResult> {
        let address = self.default_address()?;
        self.blocks_mined_by_address(address, Params::new()).await
    }

    // ==================== Explicit lookups ====================

    /// Balances of one or more addresses.
    ///
    /// One address uses the `balance` action and maps the address to the returned
    /// string. Two or more use `balancemulti` with the addresses comma-joined, and the
    /// map is built from the returned `{account, balance}` records.
    pub async fn address_balances<S: AsRef<str>>(
        &self,
        addresses: &[S],
        options: Params,
    ) -> Result<Balances> {
        match addresses {
            [] => Err(EtherscanError::InvalidInput(
                "at least one address is required".to_string(),
            )),
            [single] => {
                let address = single.as_ref();
                let balance = self
                    .query(actions::BALANCE, address, options)
                    .await?
                    .into_scalar()?;
                Ok(Balances::from([(address.to_string(), balance)]))
            }
            many => {
                let joined = many
                    .iter()
                    .map(|address| address.as_ref())
                    .collect::<Vec<&str>>()
                    .join(",");
                let records = self
                    .query(actions::BALANCE_MULTI, &joined, options)
                    .await?
                    .into_records()?;
                records.iter().map(balance_entry).collect()
            }
        }
    }

    /// Normal transactions sent from or to `address`
    pub async fn transactions_by_address(
        &self,
        address: &str,
        options: Params,
    ) -> Result<ApiResult> {
        self.query(actions::TX_LIST, address, options).await
    }

    /// Internal transactions involving `address`
    pub async fn internal_transactions_by_address(
        &self,
        address: &str,
        options: Params,
    ) -> Result<ApiResult> {
        self.query(actions::TX_LIST_INTERNAL, address, options)
            .await
    }

    /// Internal transactions spawned by the transaction `transaction_hash`
    pub async fn internal_transactions_by_hash(
        &self,
        transaction_hash: &str,
        options: Params,
    ) -> Result<ApiResult> {
        let mut params = Params::new().with("txhash", transaction_hash);
        params.extend(options);
        self.module.query(actions::TX_LIST_INTERNAL, params).await
    }

    /// ERC-20 transfer events involving `address`
    pub async fn token_transfer_events_by_address(
        &self,
        address: &str,
        options: Params,
    ) -> Result<ApiResult> {
        self.query(actions::TOKEN_TX, address, options).await
    }

    /// Blocks validated by `address`
    pub async fn blocks_mined_by_address(
        &self,
        address: &str,
        options: Params,
    ) -> Result<ApiResult> {
        self.query(actions::MINED_BLOCKS, address, options).await
    }
}

fn balance_entry(record: &Value) -> Result<(String, String)> {
    let field = |name: &str| {
        record
            .get(name)
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| {
                EtherscanError::UnexpectedResponse(format!(
                    "balance record without `{}`: {}",
                    name, record
                ))
            })
    };
    Ok((field("account")?, field("balance")?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MockTransport, Network};
    use serde_json::json;

    fn account(mock: &MockTransport, address: Option<&str>) -> Account {
        let session = Session::new("KEY", Network::Mainnet, Arc::new(mock.clone()));
        Account::new(Arc::new(session), address.map(str::to_string))
    }

    #[test]
    fn test_balance_entry() {
        let entry = balance_entry(&json!({"account": "0x1", "balance": "5"})).unwrap();
        assert_eq!(entry, ("0x1".to_string(), "5".to_string()));
        assert!(balance_entry(&json!({"account": "0x1"})).is_err());
    }

    #[tokio::test]
    async fn test_empty_address_list_rejected_locally() {
        let mock = MockTransport::new();
        let empty: [&str; 0] = [];
        let err = account(&mock, None)
            .address_balances(&empty, Params::new())
            .await
            .unwrap_err();
        assert!(matches!(err, EtherscanError::InvalidInput(_)));
        assert_eq!(mock.request_count(), 0);
    }

    #[tokio::test]
    async fn test_default_address_accessor_uses_address() {
        let mock = MockTransport::with_default_response(
            json!({"status": "1", "message": "OK", "result": []}),
        );
        let account = account(&mock, Some("0xabc"));
        account.blocks_mined().await.unwrap();

        let request = mock.last_request().unwrap();
        assert_eq!(request.action(), Some(actions::MINED_BLOCKS));
        assert_eq!(request.params.get("address"), Some("0xabc"));
    }
}
