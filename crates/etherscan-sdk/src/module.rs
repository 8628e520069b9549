//! Shared request contract used by every endpoint group

use std::sync::Arc;

use crate::response::unwrap_envelope;
use crate::{ApiResult, Params, Result, Session};

/// Parameters the module base always sets itself
const RESERVED: &[&str] = &["module", "action"];

/// One API category bound to a session.
///
/// `name` is sent as the `module` parameter of every request.
#[derive(Debug, Clone)]
pub struct Module {
    name: &'static str,
    session: Arc<Session>,
}

impl Module {
    /// Bind a module name to a session
    pub fn new(name: &'static str, session: Arc<Session>) -> Self {
        Self { name, session }
    }

    /// Remote module name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Session used for requests
    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    /// Build the parameter set for `action`: `module` and `action` first, then
    /// `params` in order. `module`/`action` keys inside `params` are ignored.
    pub fn request_params(&self, action: &str, params: Params) -> Params {
        let mut merged = Params::new()
            .with("module", self.name)
            .with("action", action);
        for (key, value) in params {
            if RESERVED.contains(&key.as_str()) {
                tracing::debug!(module = self.name, key = %key, "ignoring reserved parameter");
                continue;
            }
            merged.insert(key, value);
        }
        merged
    }

    /// GET `action` with `params` and unwrap the response envelope
    pub async fn query(&self, action: &str, params: Params) -> Result<ApiResult> {
        tracing::debug!(module = self.name, action, "sending request");
        let body = self.session.get(self.request_params(action, params)).await?;
        unwrap_envelope(body)
    }

    /// Same as [`Module::query`] but sends the parameters as a form POST
    pub async fn post_query(&self, action: &str, params: Params) -> Result<ApiResult> {
        tracing::debug!(module = self.name, action, "sending form request");
        let body = self
            .session
            .post_form(self.request_params(action, params))
            .await?;
        unwrap_envelope(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EtherscanError, MockTransport, Network};
    use serde_json::json;

    fn module(mock: &MockTransport) -> Module {
        let session = Session::new("KEY", Network::Mainnet, Arc::new(mock.clone()));
        Module::new("account", Arc::new(session))
    }

    #[test]
    fn test_accessors() {
        let mock = MockTransport::new();
        let module = module(&mock);
        assert_eq!(module.name(), "account");
        assert_eq!(module.session().api_url(), "http://api.etherscan.io/api");
        assert_eq!(module.session().network(), Network::Mainnet);
    }

    #[test]
    fn test_request_params_order() {
        let module = module(&MockTransport::new());
        let params = module.request_params("txlist", Params::new().with("address", "0x1"));
        let pairs: Vec<_> = params.iter().collect();
        assert_eq!(
            pairs,
            vec![("module", "account"), ("action", "txlist"), ("address", "0x1")]
        );
    }

    #[test]
    fn test_request_params_ignores_reserved() {
        let module = module(&MockTransport::new());
        let params = module.request_params(
            "txlist",
            Params::new().with("action", "other").with("module", "stats"),
        );
        assert_eq!(params.get("action"), Some("txlist"));
        assert_eq!(params.get("module"), Some("account"));
        assert_eq!(params.len(), 2);
    }

    #[tokio::test]
    async fn test_query_unwraps_result() {
        let mock = MockTransport::with_default_response(json!({"result": "42"}));
        let result = module(&mock).query("balance", Params::new()).await.unwrap();
        assert_eq!(result, ApiResult::Scalar("42".to_string()));
    }

    #[tokio::test]
    async fn test_query_transport_error_passes_through() {
        let mock = MockTransport::new();
        let err = module(&mock)
            .query("balance", Params::new())
            .await
            .unwrap_err();
        assert!(matches!(err, EtherscanError::Transport(_)));
    }
}
