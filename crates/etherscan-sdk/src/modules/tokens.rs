//! Token module

use std::sync::Arc;

use crate::{ApiResult, EtherscanError, Module, Params, Result, Session};

/// Remote action names
pub mod actions {
    /// Total supply of a token
    pub const TOKEN_SUPPLY: &str = "tokensupply";
    /// Token balance of an address (`address` option)
    pub const TOKEN_BALANCE: &str = "tokenbalance";
}

/// Token endpoint group.
///
/// `supply` and `balance` read the contract configured at construction; the `*_by`
/// variants take any contract address.
#[derive(Debug, Clone)]
pub struct Tokens {
    module: Module,
    contract_address: Option<String>,
}

impl Tokens {
    /// Create the group; `contract_address` backs the convenience accessors.
    /// A blank contract counts as not configured.
    pub fn new(session: Arc<Session>, contract_address: Option<String>) -> Self {
        Self {
            module: Module::new("token", session),
            contract_address: contract_address.filter(|c| !c.trim().is_empty()),
        }
    }

    /// Default token contract, if configured
    pub fn contract_address(&self) -> Option<&str> {
        self.contract_address.as_deref()
    }

    fn default_contract(&self) -> Result<&str> {
        self.contract_address
            .as_deref()
            .ok_or(EtherscanError::NotSet("Tokens.contract_address"))
    }

    async fn query(
        &self,
        action: &str,
        contract_address: &str,
        options: Params,
    ) -> Result<ApiResult> {
        let mut params = Params::new().with("contractaddress", contract_address);
        params.extend(options);
        self.module.query(action, params).await
    }

    /// Total supply of the default token
    pub async fn supply(&self) -> Result<ApiResult> {
        let contract = self.default_contract()?;
        self.supply_by(contract, Params::new()).await
    }

    /// Balance held in the default token; pass the holder as the `address` option
    pub async fn balance(&self, options: Params) -> Result<ApiResult> {
        let contract = self.default_contract()?;
        self.balance_by(contract, options).await
    }

    /// Total supply of the token at `contract_address`
    pub async fn supply_by(&self, contract_address: &str, options: Params) -> Result<ApiResult> {
        self.query(actions::TOKEN_SUPPLY, contract_address, options)
            .await
    }

    /// Balance held in the token at `contract_address`
    pub async fn balance_by(&self, contract_address: &str, options: Params) -> Result<ApiResult> {
        self.query(actions::TOKEN_BALANCE, contract_address, options)
            .await
    }
}
