//! Etherscan - client facade

use std::sync::Arc;

use crate::modules::{Account, Blocks, Contracts, Logs, Proxy, Stats, Tokens, Transactions};
use crate::transport::Transport;
use crate::{ClientConfig, Network, Result, Session};

#[cfg(feature = "http")]
use crate::transport::HttpTransport;

/// Etherscan API client.
///
/// Every endpoint group shares one [`Session`], so [`Etherscan::set_network`] retargets
/// all of them at once. Separate clients never share a session.
#[derive(Debug, Clone)]
pub struct Etherscan {
    session: Arc<Session>,
    /// `account` module
    pub account: Account,
    /// `block` module
    pub blocks: Blocks,
    /// `contract` module
    pub contracts: Contracts,
    /// `logs` module
    pub logs: Logs,
    /// `proxy` module
    pub proxy: Proxy,
    /// `stats` module
    pub stats: Stats,
    /// `transaction` module
    pub transactions: Transactions,
    /// `token` module
    pub tokens: Tokens,
}

impl Etherscan {
    /// Create a new client with HTTP transport
    #[cfg(feature = "http")]
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport = match config.timeout_secs {
            Some(secs) => HttpTransport::with_timeout(std::time::Duration::from_secs(secs))?,
            None => HttpTransport::new(),
        };
        Self::with_transport(config, transport)
    }

    /// Create a client from the `ETHERSCAN_*` environment variables
    #[cfg(feature = "http")]
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Create a client with a custom transport
    pub fn with_transport(
        config: ClientConfig,
        transport: impl Transport + 'static,
    ) -> Result<Self> {
        config.validate()?;
        let ClientConfig {
            api_key,
            network,
            default_address,
            default_token_contract,
            ..
        } = config;

        tracing::debug!(network = %network, "creating Etherscan client");
        let session = Arc::new(Session::new(api_key, network, Arc::new(transport)));

        Ok(Self {
            account: Account::new(session.clone(), default_address),
            blocks: Blocks::new(session.clone()),
            contracts: Contracts::new(session.clone()),
            logs: Logs::new(session.clone()),
            proxy: Proxy::new(session.clone()),
            stats: Stats::new(session.clone()),
            transactions: Transactions::new(session.clone()),
            tokens: Tokens::new(session.clone(), default_token_contract),
            session,
        })
    }

    /// Session shared by all endpoint groups
    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    /// Currently targeted network
    pub fn network(&self) -> Network {
        self.session.network()
    }

    /// Retarget every endpoint group of this client
    pub fn set_network(&self, network: impl Into<Network>) {
        self.session.set_network(network.into());
    }
}
