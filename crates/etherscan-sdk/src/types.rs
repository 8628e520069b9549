//! Typed parameter values

use std::fmt;

/// Block identifier for proxy queries, sent as the `tag` parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlockTag {
    /// Block number, sent as a hex quantity
    Number(u64),
    /// Latest block
    #[default]
    Latest,
    /// Earliest block (genesis)
    Earliest,
    /// Pending block (includes pending transactions)
    Pending,
}

impl fmt::Display for BlockTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockTag::Number(n) => write!(f, "0x{:x}", n),
            BlockTag::Latest => f.write_str("latest"),
            BlockTag::Earliest => f.write_str("earliest"),
            BlockTag::Pending => f.write_str("pending"),
        }
    }
}

impl From<u64> for BlockTag {
    fn from(number: u64) -> Self {
        BlockTag::Number(number)
    }
}

/// Node client reported by the chain size statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientType {
    /// go-ethereum
    Geth,
    /// Parity / OpenEthereum
    Parity,
}

impl fmt::Display for ClientType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientType::Geth => f.write_str("geth"),
            ClientType::Parity => f.write_str("parity"),
        }
    }
}

/// Node sync mode reported by the chain size statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SyncMode {
    /// Default (pruned) sync
    #[default]
    Default,
    /// Full archive
    Archive,
}

impl fmt::Display for SyncMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncMode::Default => f.write_str("default"),
            SyncMode::Archive => f.write_str("archive"),
        }
    }
}
