//! SDK error types

use thiserror::Error;

/// Convenience alias used throughout the SDK
pub type Result<T> = std::result::Result<T, EtherscanError>;

/// Etherscan client error type
#[derive(Debug, Error)]
pub enum EtherscanError {
    /// A default value required by a convenience accessor was not configured.
    /// Raised before any request is sent.
    #[error("Attribute \"{0}\" not set! Property unavailable!")]
    NotSet(&'static str),

    /// The API answered, but the envelope signalled a failure
    #[error("Remote error: {0}")]
    Remote(String),

    /// Transport/network error (connection, timeout, undecodable body)
    #[error("Transport error: {0}")]
    Transport(String),

    /// The API answered with a non-success HTTP status
    #[error("HTTP status {status} from {url}")]
    HttpStatus {
        /// Status code
        status: u16,
        /// Endpoint that was called, without query parameters
        url: String,
    },

    /// Lookup by key found nothing
    #[error("Not found: {0}")]
    NotFound(String),

    /// Caller supplied arguments that cannot form a request
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Response did not have the shape the operation expects
    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Config error
    #[error("Config error: {0}")]
    Config(String),
}

impl EtherscanError {
    /// Whether this error came from the remote envelope rather than the local side
    pub fn is_remote(&self) -> bool {
        matches!(self, EtherscanError::Remote(_))
    }
}

impl From<serde_json::Error> for EtherscanError {
    fn from(e: serde_json::Error) -> Self {
        EtherscanError::Serialization(e.to_string())
    }
}

impl From<toml::de::Error> for EtherscanError {
    fn from(e: toml::de::Error) -> Self {
        EtherscanError::Config(e.to_string())
    }
}

#[cfg(feature = "http")]
impl From<reqwest::Error> for EtherscanError {
    fn from(e: reqwest::Error) -> Self {
        match e.status() {
            Some(status) => EtherscanError::HttpStatus {
                status: status.as_u16(),
                url: e
                    .url()
                    .map(|u| format!("{}{}", u.origin().ascii_serialization(), u.path()))
                    .unwrap_or_default(),
            },
            None => EtherscanError::Transport(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_set_message_names_attribute() {
        let err = EtherscanError::NotSet("Account.address");
        assert_eq!(
            err.to_string(),
            "Attribute \"Account.address\" not set! Property unavailable!"
        );
    }

    #[test]
    fn test_remote_is_remote() {
        assert!(EtherscanError::Remote("NOTOK".to_string()).is_remote());
        assert!(!EtherscanError::Transport("refused".to_string()).is_remote());
    }

    #[test]
    fn test_from_serde_json() {
        let err: EtherscanError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, EtherscanError::Serialization(_)));
    }
}
