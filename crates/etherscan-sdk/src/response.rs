//! Response envelope handling
//!
//! Every endpoint answers with a JSON object whose `result` field carries the payload.
//! Most modules also send `status` (`"1"` ok, `"0"` failure) and `message`; the proxy
//! module answers JSON-RPC style with either `result` or `error`.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::{EtherscanError, Result};

/// Messages sent with `status: "0"` that denote an empty listing, not a failure
const EMPTY_LISTING_MESSAGES: &[&str] = &["No transactions found", "No records found"];

/// Payload of a successful call, tagged by shape
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResult {
    /// Plain string: balances, supplies, hex quantities, GUIDs, ABI text
    Scalar(String),
    /// List of records: transaction lists, logs, mined blocks
    Records(Vec<Value>),
    /// Single object: receipts, blocks, status objects
    Record(Map<String, Value>),
    /// `null`, e.g. an unknown transaction hash on the proxy module
    Null,
    /// Any other JSON value (numbers, booleans)
    Other(Value),
}

impl ApiResult {
    /// Borrow the scalar string, if this is one
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            ApiResult::Scalar(s) => Some(s),
            _ => None,
        }
    }

    /// Borrow the record list, if this is one
    pub fn as_records(&self) -> Option<&[Value]> {
        match self {
            ApiResult::Records(records) => Some(records),
            _ => None,
        }
    }

    /// Borrow the single record, if this is one
    pub fn as_record(&self) -> Option<&Map<String, Value>> {
        match self {
            ApiResult::Record(record) => Some(record),
            _ => None,
        }
    }

    /// Whether the result is `null`
    pub fn is_null(&self) -> bool {
        matches!(self, ApiResult::Null)
    }

    /// Take the scalar string or fail with [`EtherscanError::UnexpectedResponse`]
    pub fn into_scalar(self) -> Result<String> {
        match self {
            ApiResult::Scalar(s) => Ok(s),
            other => Err(unexpected("a string", &other)),
        }
    }

    /// Take the record list or fail with [`EtherscanError::UnexpectedResponse`]
    pub fn into_records(self) -> Result<Vec<Value>> {
        match self {
            ApiResult::Records(records) => Ok(records),
            other => Err(unexpected("a list", &other)),
        }
    }

    /// Take the single record or fail with [`EtherscanError::UnexpectedResponse`]
    pub fn into_record(self) -> Result<Map<String, Value>> {
        match self {
            ApiResult::Record(record) => Ok(record),
            other => Err(unexpected("an object", &other)),
        }
    }

    /// Convert back to untyped JSON
    pub fn into_value(self) -> Value {
        match self {
            ApiResult::Scalar(s) => Value::String(s),
            ApiResult::Records(records) => Value::Array(records),
            ApiResult::Record(record) => Value::Object(record),
            ApiResult::Null => Value::Null,
            ApiResult::Other(value) => value,
        }
    }

    /// Deserialize the payload into a caller-defined type
    pub fn deserialize<T: DeserializeOwned>(self) -> Result<T> {
        Ok(serde_json::from_value(self.into_value())?)
    }
}

impl From<Value> for ApiResult {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => ApiResult::Scalar(s),
            Value::Array(records) => ApiResult::Records(records),
            Value::Object(record) => ApiResult::Record(record),
            Value::Null => ApiResult::Null,
            other => ApiResult::Other(other),
        }
    }
}

fn unexpected(expected: &str, got: &ApiResult) -> EtherscanError {
    let kind = match got {
        ApiResult::Scalar(_) => "a string",
        ApiResult::Records(_) => "a list",
        ApiResult::Record(_) => "an object",
        ApiResult::Null => "null",
        ApiResult::Other(_) => "a bare value",
    };
    EtherscanError::UnexpectedResponse(format!("expected {}, got {}", expected, kind))
}

/// Unwrap a decoded response body into its payload or a remote error.
///
/// Order of checks:
/// 1. a top-level `error` field always fails;
/// 2. a `status` field is authoritative when present;
/// 3. without `status`, a result whose text contains "error" (any case) fails.
///
/// Check 3 keeps compatibility with responses that carry no status at all. It can
/// reject a legitimate payload that happens to contain the word.
pub(crate) fn unwrap_envelope(body: Value) -> Result<ApiResult> {
    let mut envelope = match body {
        Value::Object(envelope) => envelope,
        other => {
            return Err(EtherscanError::UnexpectedResponse(format!(
                "expected a JSON object, got {}",
                other
            )))
        }
    };

    if let Some(error) = envelope.remove("error") {
        return Err(EtherscanError::Remote(error_text(error)));
    }

    let result = envelope.remove("result").ok_or_else(|| {
        EtherscanError::UnexpectedResponse("missing `result` field".to_string())
    })?;

    match envelope.get("status").and_then(status_ok) {
        Some(true) => return Ok(result.into()),
        Some(false) => {
            let message = envelope
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or_default();
            if EMPTY_LISTING_MESSAGES
                .iter()
                .any(|m| message.starts_with(m))
            {
                return Ok(result.into());
            }
            return Err(EtherscanError::Remote(match result {
                Value::String(s) => s,
                _ if !message.is_empty() => message.to_string(),
                other => other.to_string(),
            }));
        }
        None => {}
    }

    let text = match &result {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    if text.to_lowercase().contains("error") {
        tracing::warn!(result = %text, "result text mentions an error, treating as failure");
        return Err(EtherscanError::Remote(text));
    }

    Ok(result.into())
}

fn status_ok(status: &Value) -> Option<bool> {
    match status {
        Value::String(s) if s == "1" => Some(true),
        Value::String(s) if s == "0" => Some(false),
        Value::Number(n) => n.as_u64().map(|n| n == 1),
        _ => None,
    }
}

// JSON-RPC style errors are objects with a message
fn error_text(error: Value) -> String {
    match error {
        Value::String(s) => s,
        Value::Object(ref obj) => obj
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| error.to_string()),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plain_result() {
        let result = unwrap_envelope(json!({"result": "42"})).unwrap();
        assert_eq!(result, ApiResult::Scalar("42".to_string()));
    }

    #[test]
    fn test_error_field() {
        let err = unwrap_envelope(json!({"error": "bad request"})).unwrap_err();
        assert!(matches!(err, EtherscanError::Remote(ref m) if m == "bad request"));
    }

    #[test]
    fn test_jsonrpc_error_object() {
        let body = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "error": {"code": -32010, "message": "Transaction nonce is too low"}
        });
        let err = unwrap_envelope(body).unwrap_err();
        assert_eq!(err.to_string(), "Remote error: Transaction nonce is too low");
    }

    #[test]
    fn test_substring_heuristic_without_status() {
        let err = unwrap_envelope(json!({"result": "Max rate limit reached, Error!"})).unwrap_err();
        assert!(
            matches!(err, EtherscanError::Remote(ref m) if m == "Max rate limit reached, Error!")
        );
    }

    #[test]
    fn test_status_one_skips_heuristic() {
        // txlist records carry an `isError` field
        let body = json!({
            "status": "1",
            "message": "OK",
            "result": [{"hash": "0xabc", "isError": "0"}]
        });
        let result = unwrap_envelope(body).unwrap();
        assert_eq!(result.as_records().map(<[Value]>::len), Some(1));
    }

    #[test]
    fn test_status_zero_fails_with_result_text() {
        let body = json!({"status": "0", "message": "NOTOK", "result": "Invalid API Key"});
        let err = unwrap_envelope(body).unwrap_err();
        assert!(matches!(err, EtherscanError::Remote(ref m) if m == "Invalid API Key"));
    }

    #[test]
    fn test_status_zero_non_string_result_uses_message() {
        let body = json!({"status": "0", "message": "NOTOK", "result": null});
        let err = unwrap_envelope(body).unwrap_err();
        assert!(matches!(err, EtherscanError::Remote(ref m) if m == "NOTOK"));
    }

    #[test]
    fn test_status_zero_empty_listing_is_success() {
        let body = json!({"status": "0", "message": "No transactions found", "result": []});
        let result = unwrap_envelope(body).unwrap();
        assert_eq!(result, ApiResult::Records(vec![]));
    }

    #[test]
    fn test_missing_result() {
        let err = unwrap_envelope(json!({"status": "1"})).unwrap_err();
        assert!(matches!(err, EtherscanError::UnexpectedResponse(_)));
    }

    #[test]
    fn test_non_object_body() {
        let err = unwrap_envelope(json!(["not", "an", "envelope"])).unwrap_err();
        assert!(matches!(err, EtherscanError::UnexpectedResponse(_)));
    }

    #[test]
    fn test_tagged_variants() {
        assert!(ApiResult::from(Value::Null).is_null());
        assert!(ApiResult::from(json!({"a": 1})).as_record().is_some());
        assert_eq!(ApiResult::from(json!(7)), ApiResult::Other(json!(7)));
    }

    #[test]
    fn test_into_scalar_mismatch() {
        let err = ApiResult::Records(vec![]).into_scalar().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unexpected response: expected a string, got a list"
        );
    }

    #[test]
    fn test_deserialize() {
        #[derive(serde::Deserialize)]
        struct Price {
            ethusd: String,
        }
        let result = ApiResult::from(json!({"ethbtc": "0.05", "ethusd": "3000.1"}));
        let price: Price = result.deserialize().unwrap();
        assert_eq!(price.ethusd, "3000.1");
    }
}
