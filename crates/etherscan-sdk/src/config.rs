//! Client configuration management

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::{EtherscanError, Network, Result};

/// Environment variable holding the API key
pub const ENV_API_KEY: &str = "ETHERSCAN_API_KEY";
/// Environment variable selecting the network
pub const ENV_NETWORK: &str = "ETHERSCAN_NETWORK";
/// Environment variable holding the default account address
pub const ENV_DEFAULT_ADDRESS: &str = "ETHERSCAN_DEFAULT_ADDRESS";
/// Environment variable holding the default token contract
pub const ENV_DEFAULT_TOKEN: &str = "ETHERSCAN_DEFAULT_TOKEN";

/// Client configuration
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// API key sent with every request
    pub api_key: String,
    /// Target network
    #[serde(default)]
    pub network: Network,
    /// Address used by the account convenience accessors
    #[serde(default)]
    pub default_address: Option<String>,
    /// Contract used by the token convenience accessors
    #[serde(default)]
    pub default_token_contract: Option<String>,
    /// Overall request timeout; reqwest's default when unset
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl ClientConfig {
    /// Mainnet configuration with no defaults
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            network: Network::Mainnet,
            default_address: None,
            default_token_contract: None,
            timeout_secs: None,
        }
    }

    /// Set the target network
    pub fn network(mut self, network: impl Into<Network>) -> Self {
        self.network = network.into();
        self
    }

    /// Set the default account address
    pub fn default_address(mut self, address: impl Into<String>) -> Self {
        self.default_address = Some(address.into());
        self
    }

    /// Set the default token contract
    pub fn default_token_contract(mut self, contract: impl Into<String>) -> Self {
        self.default_token_contract = Some(contract.into());
        self
    }

    /// Set the request timeout in seconds
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    /// Reject configurations that cannot produce a working client
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(EtherscanError::Config("api_key must not be empty".to_string()));
        }
        if self.timeout_secs == Some(0) {
            return Err(EtherscanError::Config(
                "timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Get the config directory path
    pub fn config_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".etherscan"))
    }

    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|d| d.join("config.toml"))
    }

    /// Parse a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from a TOML file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| EtherscanError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&content)
    }

    /// Load config from the default file location
    pub fn load() -> Result<Self> {
        let path = Self::config_path().ok_or_else(|| {
            EtherscanError::Config("Cannot determine config path".to_string())
        })?;
        Self::load_from(path)
    }

    /// Build config from `ETHERSCAN_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_key = lookup(ENV_API_KEY)
            .ok_or_else(|| EtherscanError::Config(format!("{} is not set", ENV_API_KEY)))?;

        let mut config = Self::new(api_key);
        if let Some(network) = lookup(ENV_NETWORK) {
            config.network = Network::from(network);
        }
        config.default_address = lookup(ENV_DEFAULT_ADDRESS).filter(|s| !s.is_empty());
        config.default_token_contract = lookup(ENV_DEFAULT_TOKEN).filter(|s| !s.is_empty());

        config.validate()?;
        Ok(config)
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("network", &self.network)
            .field("default_address", &self.default_address)
            .field("default_token_contract", &self.default_token_contract)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
