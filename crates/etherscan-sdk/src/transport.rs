//! Transport layer for API communication

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::{EtherscanError, Params};

/// Transport trait for API communication (object-safe)
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send a GET request with `params` as the query string and return the JSON body
    async fn get(&self, url: &str, params: &Params) -> Result<Value, EtherscanError>;

    /// Send a POST request with `params` form-encoded in the body and return the JSON body
    async fn post_form(&self, url: &str, params: &Params) -> Result<Value, EtherscanError>;
}

/// HTTP method of a recorded request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    /// GET with query string
    Get,
    /// POST with form body
    Post,
}

/// Request captured by [`MockTransport`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    /// HTTP method used
    pub method: HttpMethod,
    /// Endpoint URL
    pub url: String,
    /// Full parameter set, API key included
    pub params: Params,
}

impl RecordedRequest {
    /// Shortcut for the `action` parameter
    pub fn action(&self) -> Option<&str> {
        self.params.get("action")
    }

    /// Shortcut for the `module` parameter
    pub fn module(&self) -> Option<&str> {
        self.params.get("module")
    }
}

#[derive(Debug, Clone)]
enum MockReply {
    Body(Value),
    HttpStatus(u16),
}

/// Mock transport for testing.
///
/// Replies are looked up by the request's `action` parameter, then fall back to the
/// default reply. Every request is recorded, whether or not a reply was found.
/// Clones share state, so a test can keep a handle after passing one to a client.
#[derive(Clone, Default)]
pub struct MockTransport {
    replies: Arc<Mutex<HashMap<String, MockReply>>>,
    default_reply: Arc<Mutex<Option<MockReply>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockTransport {
    /// Create a new mock transport with no replies
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock that answers every request with `body`
    pub fn with_default_response(body: Value) -> Self {
        let mock = Self::new();
        mock.set_default_response(body);
        mock
    }

    /// Set the reply body for a specific action
    ///
    /// # Panics
    ///
    /// Panics if the mutex is poisoned (only possible if another thread panicked while
    /// holding the lock).
    pub fn set_response(&self, action: &str, body: Value) {
        self.replies
            .lock()
            .expect("MockTransport mutex poisoned")
            .insert(action.to_string(), MockReply::Body(body));
    }

    /// Answer a specific action with a non-success HTTP status
    ///
    /// # Panics
    ///
    /// Panics if the mutex is poisoned.
    pub fn set_http_status(&self, action: &str, status: u16) {
        self.replies
            .lock()
            .expect("MockTransport mutex poisoned")
            .insert(action.to_string(), MockReply::HttpStatus(status));
    }

    /// Set the reply used when no action-specific reply exists
    ///
    /// # Panics
    ///
    /// Panics if the mutex is poisoned.
    pub fn set_default_response(&self, body: Value) {
        *self
            .default_reply
            .lock()
            .expect("MockTransport mutex poisoned") = Some(MockReply::Body(body));
    }

    /// All requests seen so far, oldest first
    ///
    /// # Panics
    ///
    /// Panics if the mutex is poisoned.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .expect("MockTransport mutex poisoned")
            .clone()
    }

    /// Most recent request
    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.requests().pop()
    }

    /// Number of requests seen so far
    pub fn request_count(&self) -> usize {
        self.requests().len()
    }

    /// Clear replies and recorded requests
    ///
    /// # Panics
    ///
    /// Panics if the mutex is poisoned.
    pub fn reset(&self) {
        self.replies
            .lock()
            .expect("MockTransport mutex poisoned")
            .clear();
        self.requests
            .lock()
            .expect("MockTransport mutex poisoned")
            .clear();
        *self
            .default_reply
            .lock()
            .expect("MockTransport mutex poisoned") = None;
    }

    fn respond(
        &self,
        method: HttpMethod,
        url: &str,
        params: &Params,
    ) -> Result<Value, EtherscanError> {
        self.requests.lock().map_err(poisoned)?.push(RecordedRequest {
            method,
            url: url.to_string(),
            params: params.clone(),
        });

        let action = params.get("action").unwrap_or_default();
        let custom = self.replies.lock().map_err(poisoned)?.get(action).cloned();
        let reply = match custom {
            Some(reply) => Some(reply),
            None => self.default_reply.lock().map_err(poisoned)?.clone(),
        };

        match reply {
            Some(MockReply::Body(body)) => Ok(body),
            Some(MockReply::HttpStatus(status)) => Err(EtherscanError::HttpStatus {
                status,
                url: url.to_string(),
            }),
            None => Err(EtherscanError::Transport(format!(
                "no mock response for action: {}",
                action
            ))),
        }
    }
}

fn poisoned<T>(_: T) -> EtherscanError {
    EtherscanError::Transport("MockTransport mutex poisoned".to_string())
}

#[async_trait]
impl Transport for MockTransport {
    async fn get(&self, url: &str, params: &Params) -> Result<Value, EtherscanError> {
        self.respond(HttpMethod::Get, url, params)
    }

    async fn post_form(&self, url: &str, params: &Params) -> Result<Value, EtherscanError> {
        self.respond(HttpMethod::Post, url, params)
    }
}

/// HTTP transport backed by `reqwest`
#[cfg(feature = "http")]
pub struct HttpTransport {
    client: reqwest::Client,
}

#[cfg(feature = "http")]
impl HttpTransport {
    /// Create a new HTTP transport with reqwest's default settings
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Create a transport whose requests time out after `timeout`
    pub fn with_timeout(timeout: std::time::Duration) -> Result<Self, EtherscanError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| EtherscanError::Config(e.to_string()))?;
        Ok(Self { client })
    }

    /// Wrap an already configured reqwest client
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    async fn decode(url: &str, response: reqwest::Response) -> Result<Value, EtherscanError> {
        let status = response.status();
        if !status.is_success() {
            return Err(EtherscanError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        response
            .json()
            .await
            .map_err(|e| EtherscanError::Transport(e.to_string()))
    }
}

#[cfg(feature = "http")]
impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "http")]
#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str, params: &Params) -> Result<Value, EtherscanError> {
        let response = self.client.get(url).query(params).send().await?;
        Self::decode(url, response).await
    }

    async fn post_form(&self, url: &str, params: &Params) -> Result<Value, EtherscanError> {
        let response = self.client.post(url).form(params).send().await?;
        Self::decode(url, response).await
    }
}
