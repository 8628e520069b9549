//! Target network selection

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Host used for mainnet
pub const MAINNET_HOST: &str = "http://api.etherscan.io";

/// Network an Etherscan client talks to.
///
/// Parsed from a name: `"mainnet"` (any case) selects [`Network::Mainnet`], a value
/// starting with `http://` or `https://` selects [`Network::Custom`], anything else is
/// treated as the name of a test network hosted under `api.<name>.etherscan.io`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Network {
    /// `http://api.etherscan.io`
    #[default]
    Mainnet,
    /// `http://api.<name>.etherscan.io`
    Named(String),
    /// Any Etherscan-compatible host, given as a base URL without the `/api` suffix
    Custom(String),
}

impl Network {
    /// Named test network, e.g. `Network::named("sepolia")`
    pub fn named(name: impl Into<String>) -> Self {
        Network::from(name.into())
    }

    /// Base URL of the API host
    pub fn host(&self) -> String {
        match self {
            Network::Mainnet => MAINNET_HOST.to_string(),
            Network::Named(name) => format!("http://api.{}.etherscan.io", name),
            Network::Custom(url) => url.clone(),
        }
    }

    /// Full endpoint URL every request is sent to
    pub fn api_url(&self) -> String {
        format!("{}/api", self.host())
    }

    /// Name the network was selected by
    pub fn name(&self) -> &str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Named(name) => name,
            Network::Custom(url) => url,
        }
    }
}

impl From<String> for Network {
    fn from(value: String) -> Self {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case("mainnet") {
            Network::Mainnet
        } else if value.starts_with("http://") || value.starts_with("https://") {
            Network::Custom(value.trim_end_matches('/').to_string())
        } else {
            Network::Named(value.to_string())
        }
    }
}

impl From<&str> for Network {
    fn from(value: &str) -> Self {
        Network::from(value.to_string())
    }
}

impl From<Network> for String {
    fn from(network: Network) -> Self {
        network.name().to_string()
    }
}

impl FromStr for Network {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Network::from(s))
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mainnet_host() {
        assert_eq!(Network::Mainnet.host(), "http://api.etherscan.io");
        assert_eq!(Network::Mainnet.api_url(), "http://api.etherscan.io/api");
    }

    #[test]
    fn test_named_host() {
        let network = Network::named("ropsten");
        assert_eq!(network, Network::Named("ropsten".to_string()));
        assert_eq!(network.host(), "http://api.ropsten.etherscan.io");
    }

    #[test]
    fn test_parse_mainnet_any_case() {
        assert_eq!(Network::from("MainNet"), Network::Mainnet);
        assert_eq!(Network::from(""), Network::Mainnet);
    }

    #[test]
    fn test_parse_custom_url() {
        let network: Network = "http://127.0.0.1:1234/".parse().unwrap();
        assert_eq!(network, Network::Custom("http://127.0.0.1:1234".to_string()));
        assert_eq!(network.api_url(), "http://127.0.0.1:1234/api");
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&Network::named("kovan")).unwrap();
        assert_eq!(json, "\"kovan\"");
        let network: Network = serde_json::from_str("\"mainnet\"").unwrap();
        assert_eq!(network, Network::Mainnet);
    }
}
