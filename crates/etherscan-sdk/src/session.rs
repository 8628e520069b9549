//! Shared session: API key, target network and transport

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use serde_json::Value;

use crate::transport::Transport;
use crate::{Network, Params, Result};

/// State shared by every endpoint group of one client.
///
/// The API key is attached to every request as `apikey`. The network can be changed
/// at any time; requests sent afterwards by any holder of this session use the new host.
pub struct Session {
    api_key: String,
    network: RwLock<Network>,
    transport: Arc<dyn Transport>,
}

impl Session {
    /// Create a session
    pub fn new(
        api_key: impl Into<String>,
        network: Network,
        transport: Arc<dyn Transport>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            network: RwLock::new(network),
            transport,
        }
    }

    /// Currently targeted network
    pub fn network(&self) -> Network {
        self.network.read().clone()
    }

    /// Retarget every subsequent request
    pub fn set_network(&self, network: Network) {
        tracing::debug!(network = %network, "reconfiguring target network");
        *self.network.write() = network;
    }

    /// Endpoint URL for the current network
    pub fn api_url(&self) -> String {
        self.network.read().api_url()
    }

    /// Send a GET request carrying `params` plus the API key
    pub async fn get(&self, params: Params) -> Result<Value> {
        let url = self.api_url();
        let params = self.authorize(params);
        self.transport.get(&url, &params).await
    }

    /// Send a form POST carrying `params` plus the API key
    pub async fn post_form(&self, params: Params) -> Result<Value> {
        let url = self.api_url();
        let params = self.authorize(params);
        self.transport.post_form(&url, &params).await
    }

    fn authorize(&self, params: Params) -> Params {
        let mut authorized = Params::new().with("apikey", &self.api_key);
        authorized.extend(params);
        // The session key always wins over a caller-supplied one
        authorized.insert("apikey", &self.api_key);
        authorized
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("api_key", &"<redacted>")
            .field("network", &*self.network.read())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MockTransport;
    use serde_json::json;

    fn session(mock: &MockTransport) -> Session {
        Session::new("KEY", Network::Mainnet, Arc::new(mock.clone()))
    }

    #[tokio::test]
    async fn test_api_key_attached_first() {
        let mock = MockTransport::with_default_response(json!({"result": "1"}));
        session(&mock)
            .get(Params::new().with("module", "stats"))
            .await
            .unwrap();

        let request = mock.last_request().unwrap();
        let keys: Vec<_> = request.params.keys().collect();
        assert_eq!(keys, vec!["apikey", "module"]);
        assert_eq!(request.params.get("apikey"), Some("KEY"));
        assert_eq!(request.url, "http://api.etherscan.io/api");
    }

    #[tokio::test]
    async fn test_caller_cannot_override_api_key() {
        let mock = MockTransport::with_default_response(json!({"result": "1"}));
        session(&mock)
            .get(Params::new().with("apikey", "OTHER"))
            .await
            .unwrap();
        assert_eq!(mock.last_request().unwrap().params.get("apikey"), Some("KEY"));
    }

    #[tokio::test]
    async fn test_set_network_changes_url() {
        let mock = MockTransport::with_default_response(json!({"result": "1"}));
        let session = session(&mock);
        session.set_network(Network::named("goerli"));
        session.post_form(Params::new()).await.unwrap();
        assert_eq!(
            mock.last_request().unwrap().url,
            "http://api.goerli.etherscan.io/api"
        );
    }

    #[test]
    fn test_debug_redacts_key() {
        let session = session(&MockTransport::new());
        let debug = format!("{:?}", session);
        assert!(!debug.contains("KEY"));
        assert!(debug.contains("redacted"));
    }
}
