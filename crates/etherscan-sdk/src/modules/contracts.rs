//! Contract module: ABIs, verified source and source verification
//!
//! Verification is the one write operation of the API. It is sent as a form POST
//! because the source code rarely fits in a query string; everything else is a GET.

use std::sync::Arc;

use crate::{ApiResult, EtherscanError, Module, Params, Result, Session};

/// Remote action names
pub mod actions {
    /// Submit source code for verification
    pub const VERIFY_SOURCE_CODE: &str = "verifysourcecode";
    /// Poll a verification request
    pub const CHECK_VERIFY_STATUS: &str = "checkverifystatus";
    /// ABI of a verified contract
    pub const GET_ABI: &str = "getabi";
    /// Source code and metadata of a verified contract
    pub const GET_SOURCE_CODE: &str = "getsourcecode";
}

/// Optimizer runs assumed when none are given
pub const DEFAULT_RUNS: u32 = 200;

/// Source verification request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractSubmission {
    /// Contract name as declared in the source
    pub contract_name: String,
    /// Deployed contract address
    pub contract_address: String,
    /// Solidity source
    pub source_code: String,
    /// Compiler version, e.g. `v0.8.19+commit.7dd6d404`
    pub compiler_version: String,
    /// Optimizer runs
    pub runs: u32,
}

impl ContractSubmission {
    /// New submission with [`DEFAULT_RUNS`] optimizer runs
    pub fn new(
        contract_name: impl Into<String>,
        contract_address: impl Into<String>,
        source_code: impl Into<String>,
        compiler_version: impl Into<String>,
    ) -> Self {
        Self {
            contract_name: contract_name.into(),
            contract_address: contract_address.into(),
            source_code: source_code.into(),
            compiler_version: compiler_version.into(),
            runs: DEFAULT_RUNS,
        }
    }

    /// Override the optimizer runs
    pub fn runs(mut self, runs: u32) -> Self {
        self.runs = runs;
        self
    }

    fn to_params(&self) -> Params {
        Params::new()
            .with("contractname", &self.contract_name)
            .with("contractaddress", &self.contract_address)
            .with("sourceCode", &self.source_code)
            .with("compilerversion", &self.compiler_version)
            .with("runs", self.runs)
    }
}

/// Contract endpoint group
#[derive(Debug, Clone)]
pub struct Contracts {
    module: Module,
}

impl Contracts {
    /// Create the group
    pub fn new(session: Arc<Session>) -> Self {
        Self {
            module: Module::new("contract", session),
        }
    }

    /// Submit source code for verification. Extra fields such as `optimizationUsed`,
    /// `codeformat` or `constructorArguements` go in `options`.
    ///
    /// Returns the GUID to poll with [`Contracts::verification_status`].
    pub async fn submit_for_verification(
        &self,
        submission: &ContractSubmission,
        options: Params,
    ) -> Result<ApiResult> {
        let mut params = submission.to_params();
        params.extend(options);
        self.module
            .post_query(actions::VERIFY_SOURCE_CODE, params)
            .await
    }

    /// Status of the verification request `guid`
    pub async fn verification_status(&self, guid: &str, options: Params) -> Result<ApiResult> {
        let mut params = Params::new().with("guid", guid);
        params.extend(options);
        self.module.query(actions::CHECK_VERIFY_STATUS, params)
            .await
    }

    /// ABI of the verified contract at `address`, as JSON text
    pub async fn get_abi(&self, address: &str, options: Params) -> Result<ApiResult> {
        let mut params = Params::new().with("address", address);
        params.extend(options);
        self.module.query(actions::GET_ABI, params).await
    }

    /// Map-style ABI lookup: an HTTP error status becomes [`EtherscanError::NotFound`]
    pub async fn get(&self, address: &str) -> Result<ApiResult> {
        match self.get_abi(address, Params::new()).await {
            Err(EtherscanError::HttpStatus { status, .. }) => {
                tracing::debug!(address, status, "ABI lookup failed");
                Err(EtherscanError::NotFound(address.to_string()))
            }
            other => other,
        }
    }

    /// Verified source code and compiler metadata of the contract at `address`
    pub async fn source_code(&self, address: &str, options: Params) -> Result<ApiResult> {
        let mut params = Params::new().with("address", address);
        params.extend(options);
        self.module.query(actions::GET_SOURCE_CODE, params).await
    }
}
