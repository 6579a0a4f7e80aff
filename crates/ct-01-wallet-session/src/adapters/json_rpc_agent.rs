//! JSON-RPC Signing Agent Adapter
//!
//! Implements `SigningAgent` against any EIP-1193 style endpoint that speaks
//! JSON-RPC over HTTP (a wallet bridge, or a development node with unlocked
//! accounts).

use std::time::Duration;

use async_trait::async_trait;
use shared_rpc::{JsonRpcClient, RpcError};
use shared_types::{hash_from_hex, Hash, WalletAddress};
use tracing::{debug, warn};

use crate::domain::{SessionError, TransactionRequest};
use crate::ports::SigningAgent;

/// JSON-RPC method-not-found.
const METHOD_NOT_FOUND: i64 = -32601;

/// HTTP JSON-RPC signing agent.
pub struct JsonRpcSigningAgent {
    client: JsonRpcClient,
    agent_id: String,
}

impl JsonRpcSigningAgent {
    /// Connect to the agent at `url`.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, SessionError> {
        let url = url.into();
        let client = JsonRpcClient::with_timeout(url.clone(), timeout)
            .map_err(|e| SessionError::NoSigningAgent(e.to_string()))?;
        Ok(Self {
            client,
            agent_id: url,
        })
    }

    fn map_rpc_error(&self, err: RpcError) -> SessionError {
        match err {
            RpcError::Rpc(rpc) if rpc.is_user_rejection() => SessionError::UserRejected(rpc.message),
            RpcError::Rpc(rpc) => SessionError::Agent(rpc.message),
            RpcError::Connection(reason) => SessionError::NoSigningAgent(reason),
            RpcError::Parse(reason) => SessionError::InvalidResponse(reason),
            RpcError::Http(e) => SessionError::Agent(e.to_string()),
        }
    }

    fn parse_accounts(raw: Vec<String>) -> Result<Vec<WalletAddress>, SessionError> {
        raw.iter()
            .map(|a| {
                a.parse::<WalletAddress>()
                    .map_err(|e| SessionError::InvalidResponse(e.to_string()))
            })
            .collect()
    }
}

#[async_trait]
impl SigningAgent for JsonRpcSigningAgent {
    async fn request_accounts(&self) -> Result<Vec<WalletAddress>, SessionError> {
        debug!("[ct-01] Requesting accounts from {}", self.agent_id);

        let accounts: Vec<String> = match self.client.call("eth_requestAccounts", [(); 0]).await {
            Ok(accounts) => accounts,
            Err(RpcError::Rpc(rpc)) if rpc.code == METHOD_NOT_FOUND => {
                // Development nodes only know eth_accounts.
                debug!("[ct-01] eth_requestAccounts unsupported, falling back to eth_accounts");
                self.client
                    .call("eth_accounts", [(); 0])
                    .await
                    .map_err(|e| self.map_rpc_error(e))?
            }
            Err(e) => {
                warn!("[ct-01] Account request to {} failed: {}", self.agent_id, e);
                return Err(self.map_rpc_error(e));
            }
        };

        Self::parse_accounts(accounts)
    }

    async fn send_transaction(&self, tx: TransactionRequest) -> Result<Hash, SessionError> {
        debug!(
            "[ct-01] Sending transaction from {} to {} ({} bytes calldata)",
            tx.from,
            tx.to,
            tx.data.len()
        );

        let tx_hash: String = self
            .client
            .call("eth_sendTransaction", [&tx])
            .await
            .map_err(|e| self.map_rpc_error(e))?;

        hash_from_hex(&tx_hash)
            .ok_or_else(|| SessionError::InvalidResponse(format!("bad transaction hash {tx_hash}")))
    }

    fn agent_id(&self) -> &str {
        &self.agent_id
    }
}
