//! JSON-RPC client over `reqwest`.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::types::{JsonRpcError, JsonRpcRequest, JsonRpcResponse};

/// Errors that can occur when talking to a JSON-RPC endpoint.
#[derive(Debug, Error)]
pub enum RpcError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{0}")]
    Rpc(JsonRpcError),
    #[error("Failed to parse response: {0}")]
    Parse(String),
    #[error("Connection failed: {0}")]
    Connection(String),
}

impl RpcError {
    /// The JSON-RPC error object, when the endpoint answered with one.
    pub fn rpc_error(&self) -> Option<&JsonRpcError> {
        match self {
            Self::Rpc(err) => Some(err),
            _ => None,
        }
    }
}

/// JSON-RPC 2.0 client bound to one endpoint.
pub struct JsonRpcClient {
    client: Client,
    endpoint: String,
    request_id: AtomicU64,
}

impl JsonRpcClient {
    /// Create a client with transport defaults (30s request, 5s connect).
    pub fn new(endpoint: impl Into<String>) -> Result<Self, RpcError> {
        Self::with_timeout(endpoint, Duration::from_secs(30))
    }

    /// Create a client with a custom request timeout.
    pub fn with_timeout(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, RpcError> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(5))
            .build()
            .map_err(RpcError::Http)?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            request_id: AtomicU64::new(1),
        })
    }

    /// Endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn next_id(&self) -> u64 {
        self.request_id.fetch_add(1, Ordering::Relaxed)
    }

    /// Call a JSON-RPC method.
    ///
    /// A missing or `null` result is handed to `R` as JSON `null`, so
    /// `R = Option<_>` observes "not yet available" as `None`.
    pub async fn call<P: Serialize, R: DeserializeOwned>(
        &self,
        method: &str,
        params: P,
    ) -> Result<R, RpcError> {
        let request = JsonRpcRequest::new(method, params, self.next_id());
        debug!(method, endpoint = %self.endpoint, id = request.id, "json-rpc call");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    RpcError::Connection(format!("Cannot connect to {}", self.endpoint))
                } else {
                    RpcError::Http(e)
                }
            })?;

        let rpc_response: JsonRpcResponse = response
            .json()
            .await
            .map_err(|e| RpcError::Parse(e.to_string()))?;

        if let Some(error) = rpc_response.error {
            return Err(RpcError::Rpc(error));
        }

        let result = rpc_response.result.unwrap_or(serde_json::Value::Null);
        serde_json::from_value(result).map_err(|e| RpcError::Parse(e.to_string()))
    }
}
