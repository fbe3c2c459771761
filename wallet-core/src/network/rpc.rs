// wallet-core/src/network/rpc.rs
//
// JSON-RPC 2.0 over HTTP
//
// Envelope: {jsonrpc: "2.0", id, method, params}
// Response: `error` khác null LUÔN thắng `result`.

use crate::config::WalletConfig;
use crate::error::{NetworkError, WalletResult};
use crate::network::traits::RpcTransport;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

#[derive(Debug, Serialize)]
pub struct JsonRpcRequest<'a> {
    jsonrpc: &'a str,
    id: u64,
    method: &'a str,
    params: Value,
}

impl<'a> JsonRpcRequest<'a> {
    pub fn new(id: u64, method: &'a str, params: Value) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            method,
            params,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct JsonRpcErrorObject {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct JsonRpcResponse {
    /// `Value::Null` when absent or null.
    #[serde(default)]
    pub result: Value,
    #[serde(default)]
    pub error: Option<JsonRpcErrorObject>,
}

impl JsonRpcResponse {
    /// Unwrap the envelope. A present `error` short-circuits even when
    /// `result` is also set.
    pub fn into_result(self, method: &str) -> WalletResult<Value> {
        if let Some(error) = self.error {
            return Err(NetworkError::Rpc {
                code: error.code,
                message: error.message,
            }
            .into());
        }
        if self.result.is_null() {
            tracing::debug!(method, "rpc returned a null result");
        }
        Ok(self.result)
    }
}

/// reqwest-backed transport against a single fullnode URL.
pub struct HttpTransport {
    url: String,
    client: reqwest::Client,
    next_id: AtomicU64,
}

impl HttpTransport {
    pub fn new(url: impl Into<String>, timeout: Duration) -> WalletResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| NetworkError::Unavailable(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            url: url.into(),
            client,
            next_id: AtomicU64::new(1),
        })
    }

    pub fn from_config(config: &WalletConfig) -> WalletResult<Self> {
        Self::new(config.rpc_url.clone(), config.timeout())
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport").field("url", &self.url).finish()
    }
}

#[async_trait]
impl RpcTransport for HttpTransport {
    async fn call(&self, method: &str, params: Value) -> WalletResult<Value> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let request = JsonRpcRequest::new(id, method, params);
        tracing::debug!(method, id, "rpc request");

        let response = self
            .client
            .post(&self.url)
            .json(&request)
            .send()
            .await
            .map_err(|e| transport_error(method, e))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(method, status = %status, "rpc http error");
            let message = format!("{} returned HTTP {}", method, status);
            return Err(NetworkError::Unavailable(message).into());
        }

        let envelope: JsonRpcResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                NetworkError::Timeout(format!("{}: {}", method, e))
            } else {
                NetworkError::MalformedResponse(format!("{}: {}", method, e))
            }
        })?;

        envelope.into_result(method)
    }
}

fn transport_error(method: &str, error: reqwest::Error) -> NetworkError {
    if error.is_timeout() {
        NetworkError::Timeout(format!("{}: {}", method, error))
    } else if error.is_connect() {
        NetworkError::Connect(format!("{}: {}", method, error))
    } else {
        NetworkError::Unavailable(format!("{}: {}", method, error))
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WalletError;
    use serde_json::json;

    fn parse(value: Value) -> JsonRpcResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_request_envelope() {
        let request = JsonRpcRequest::new(7, "suix_getBalance", json!(["0x1"]));
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "jsonrpc": "2.0", "id": 7, "method": "suix_getBalance", "params": ["0x1"] })
        );
    }

    #[test]
    fn test_result_is_returned() {
        let response = parse(json!({ "jsonrpc": "2.0", "id": 1, "result": { "a": 1 } }));
        assert_eq!(response.into_result("m").unwrap(), json!({ "a": 1 }));
    }

    #[test]
    fn test_error_wins_over_result() {
        let response = parse(json!({
            "jsonrpc": "2.0",
            "id": 1,
            "result": { "a": 1 },
            "error": { "code": -32602, "message": "Invalid params" }
        }));
        assert_eq!(
            response.into_result("m"),
            Err(WalletError::Network(NetworkError::Rpc {
                code: -32602,
                message: "Invalid params".into()
            }))
        );
    }

    #[test]
    fn test_null_error_is_ignored() {
        let response = parse(json!({ "jsonrpc": "2.0", "id": 1, "result": 5, "error": null }));
        assert_eq!(response.into_result("m").unwrap(), json!(5));
    }

    #[test]
    fn test_missing_result_is_null() {
        let response = parse(json!({ "jsonrpc": "2.0", "id": 1 }));
        assert_eq!(response.into_result("m").unwrap(), Value::Null);
    }

    #[test]
    fn test_transport_from_config() {
        let transport = HttpTransport::from_config(&WalletConfig::default()).unwrap();
        assert_eq!(transport.url(), "https://fullnode.mainnet.sui.io:443");
    }
}
