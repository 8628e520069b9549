//! Block module

use std::sync::Arc;

use crate::{ApiResult, Module, Params, Result, Session};

/// Remote action names
pub mod actions {
    /// Block and uncle rewards
    pub const GET_BLOCK_REWARD: &str = "getblockreward";
}

/// Block endpoint group
#[derive(Debug, Clone)]
pub struct Blocks {
    module: Module,
}

impl Blocks {
    /// Create the group
    pub fn new(session: Arc<Session>) -> Self {
        Self {
            module: Module::new("block", session),
        }
    }

    /// Mining reward and uncle inclusion rewards of `block_number`
    pub async fn block_reward(&self, block_number: u64, options: Params) -> Result<ApiResult> {
        let mut params = Params::new().with("blockno", block_number);
        params.extend(options);
        self.module.query(actions::GET_BLOCK_REWARD, params).await
    }
}
