//! Endpoint groups, one per remote API module

pub mod account;
pub mod blocks;
pub mod contracts;
pub mod logs;
pub mod proxy;
pub mod stats;
pub mod tokens;
pub mod transactions;

pub use account::{Account, Balances};
pub use blocks::Blocks;
pub use contracts::{ContractSubmission, Contracts};
pub use logs::Logs;
pub use proxy::Proxy;
pub use stats::Stats;
pub use tokens::Tokens;
pub use transactions::Transactions;
