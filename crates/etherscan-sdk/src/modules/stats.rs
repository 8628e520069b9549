//! Stats module

use std::sync::Arc;

use crate::types::{ClientType, SyncMode};
use crate::{ApiResult, Module, Params, Result, Session};

/// Remote action names
pub mod actions {
    /// Total ether supply
    pub const ETH_SUPPLY: &str = "ethsupply";
    /// Last ether price
    pub const ETH_PRICE: &str = "ethprice";
    /// Chain size history
    pub const CHAIN_SIZE: &str = "chainsize";
}

/// Stats endpoint group
#[derive(Debug, Clone)]
pub struct Stats {
    module: Module,
}

impl Stats {
    /// Create the group
    pub fn new(session: Arc<Session>) -> Self {
        Self {
            module: Module::new("stats", session),
        }
    }

    /// Total supply of ether, in wei
    pub async fn total_eth_supply(&self) -> Result<ApiResult> {
        self.module.query(actions::ETH_SUPPLY, Params::new()).await
    }

    /// Last ether price in BTC and USD with timestamps
    pub async fn last_price(&self) -> Result<ApiResult> {
        self.module.query(actions::ETH_PRICE, Params::new()).await
    }

    /// Size of a full node's chain data per day between two dates (`yyyy-MM-dd`)
    pub async fn node_size_for(
        &self,
        client: ClientType,
        sync_mode: SyncMode,
        start_date: &str,
        end_date: &str,
        options: Params,
    ) -> Result<ApiResult> {
        let mut params = Params::new()
            .with("clienttype", client)
            .with("startdate", start_date)
            .with("enddate", end_date)
            .with("syncmode", sync_mode);
        params.extend(options);
        self.module.query(actions::CHAIN_SIZE, params).await
    }
}
