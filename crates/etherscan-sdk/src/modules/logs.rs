//! Event log module

use std::sync::Arc;

use crate::{ApiResult, Module, Params, Result, Session};

/// Remote action names
pub mod actions {
    /// Filtered event log query
    pub const GET_LOGS: &str = "getLogs";
}

/// Event log endpoint group.
///
/// Every query goes through the single `getLogs` action; filters such as `fromBlock`,
/// `toBlock`, `address`, `topic0`..`topic3` and `topic0_1_opr` are passed as options.
#[derive(Debug, Clone)]
pub struct Logs {
    module: Module,
}

impl Logs {
    /// Create the group
    pub fn new(session: Arc<Session>) -> Self {
        Self {
            module: Module::new("logs", session),
        }
    }

    /// Run a log query with the given filters
    pub async fn query(&self, options: Params) -> Result<ApiResult> {
        self.module.query(actions::GET_LOGS, options).await
    }
}
