//! # etherscan-sdk
//!
//! Rust client for the Etherscan blockchain-data API.
//!
//! ## Features
//!
//! - **Etherscan**: client facade exposing one field per API module
//! - **Endpoint groups**: account, blocks, contracts, logs, proxy, stats, transactions, tokens
//! - **ApiResult**: response payloads tagged by shape
//! - **ClientConfig**: configuration from code, TOML or environment
//! - **MockTransport**: scripted transport for offline tests
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use etherscan_sdk::{ClientConfig, Etherscan, Params};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::new("YourApiKeyToken")
//!         .default_address("0xddbd2b932c763ba5b1b7ae3b362eac3e8d40121a");
//!     let client = Etherscan::new(config)?;
//!
//!     // Balance of the default address
//!     let balances = client.account.balance().await?;
//!     println!("Balances: {:?}", balances);
//!
//!     // Latest transactions, newest first
//!     let txs = client
//!         .account
//!         .transactions_by_address(
//!             "0xde0b295669a9fd93d5f28d9ec85e40f4cb697bae",
//!             Params::new().with("sort", "desc").with("page", 1).with("offset", 10),
//!         )
//!         .await?;
//!     println!("Transactions: {:?}", txs.as_records().map(|r| r.len()));
//!
//!     // Switch every module to a test network
//!     client.set_network("sepolia");
//!     let gas = client.proxy.gas_price().await?;
//!     println!("Gas price: {:?}", gas.as_scalar());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Errors
//!
//! Convenience accessors that depend on a configured default fail with
//! [`EtherscanError::NotSet`] before any request. A response whose envelope signals
//! failure becomes [`EtherscanError::Remote`]; see [`ApiResult`] for how success payloads
//! are shaped.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod client;
mod config;
mod error;
pub mod modules;
mod module;
mod network;
mod params;
mod response;
mod session;
pub mod transport;
pub mod types;

// Re-export main types
pub use client::Etherscan;
pub use config::ClientConfig;
pub use error::{EtherscanError, Result};
pub use module::Module;
pub use network::Network;
pub use params::Params;
pub use response::ApiResult;
pub use session::Session;

/// Re-export Transport trait for custom implementations
pub use transport::{MockTransport, Transport};

#[cfg(feature = "http")]
pub use transport::HttpTransport;
