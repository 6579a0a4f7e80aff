//! JSON-RPC 2.0 envelope types.

use serde::{Deserialize, Serialize};

/// EIP-1193 "user rejected request".
pub const USER_REJECTED_CODE: i64 = 4001;

/// Geth/Hardhat "execution reverted" code.
pub const EXECUTION_REVERTED_CODE: i64 = 3;

/// JSON-RPC request structure
#[derive(Debug, Serialize)]
pub struct JsonRpcRequest<T> {
    pub jsonrpc: &'static str,
    pub method: String,
    pub params: T,
    pub id: u64,
}

impl<T> JsonRpcRequest<T> {
    pub fn new(method: impl Into<String>, params: T, id: u64) -> Self {
        Self {
            jsonrpc: "2.0",
            method: method.into(),
            params,
            id,
        }
    }
}

/// JSON-RPC response structure
#[derive(Debug, Deserialize)]
pub struct JsonRpcResponse {
    #[serde(default)]
    pub jsonrpc: String,
    #[serde(default)]
    pub id: serde_json::Value,
    #[serde(default)]
    pub result: Option<serde_json::Value>,
    #[serde(default)]
    pub error: Option<JsonRpcError>,
}

/// JSON-RPC error object
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct JsonRpcError {
    pub code: i64,
    pub message: String,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

impl JsonRpcError {
    /// The user declined the request in their signing agent.
    pub fn is_user_rejection(&self) -> bool {
        self.code == USER_REJECTED_CODE
    }

    /// The call executed and reverted.
    pub fn is_revert(&self) -> bool {
        self.code == EXECUTION_REVERTED_CODE || self.message.to_lowercase().contains("revert")
    }
}

impl std::fmt::Display for JsonRpcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RPC Error {}: {}", self.code, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serialization() {
        let req = JsonRpcRequest::new("eth_call", serde_json::json!([]), 7);
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["jsonrpc"], "2.0");
        assert_eq!(value["method"], "eth_call");
        assert_eq!(value["id"], 7);
    }

    #[test]
    fn test_error_classification() {
        let rejected: JsonRpcResponse = serde_json::from_str(
            r#"{"jsonrpc":"2.0","id":1,"error":{"code":4001,"message":"User rejected the request."}}"#,
        )
        .unwrap();
        let err = rejected.error.unwrap();
        assert!(err.is_user_rejection());
        assert!(!err.is_revert());

        let reverted = JsonRpcError {
            code: -32000,
            message: "execution reverted: Station not found".to_string(),
            data: None,
        };
        assert!(reverted.is_revert());
    }

    #[test]
    fn test_null_result_parses() {
        let resp: JsonRpcResponse =
            serde_json::from_str(r#"{"jsonrpc":"2.0","id":3,"result":null}"#).unwrap();
        assert!(resp.result.is_none() || resp.result == Some(serde_json::Value::Null));
        assert!(resp.error.is_none());
    }
}
