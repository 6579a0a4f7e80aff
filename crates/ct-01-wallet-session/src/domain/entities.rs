//! # Domain Entities

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use shared_types::{Hash, WalletAddress};

use super::errors::SessionError;
use crate::ports::SigningAgent;

/// A transaction to be signed and broadcast by the signing agent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TransactionRequest {
    /// Sender; must be the session's account.
    pub from: WalletAddress,
    /// Target contract.
    pub to: WalletAddress,
    /// ABI-encoded call data.
    #[serde(serialize_with = "serialize_hex_bytes")]
    pub data: Vec<u8>,
}

fn serialize_hex_bytes<S: serde::Serializer>(data: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format!("0x{}", hex::encode(data)))
}

/// An active connection to a signing agent.
///
/// Ephemeral and never persisted. A fresh one can be obtained at any time
/// from the session manager.
#[derive(Clone)]
pub struct Session {
    address: WalletAddress,
    signer: Arc<dyn SigningAgent>,
    connected_at: DateTime<Utc>,
}

impl Session {
    /// Bind an address to the agent that controls it.
    pub fn new(address: WalletAddress, signer: Arc<dyn SigningAgent>) -> Self {
        Self {
            address,
            signer,
            connected_at: Utc::now(),
        }
    }

    /// Active wallet address.
    pub fn address(&self) -> WalletAddress {
        self.address
    }

    /// Signing handle.
    pub fn signer(&self) -> &Arc<dyn SigningAgent> {
        &self.signer
    }

    /// When this session was established.
    pub fn connected_at(&self) -> DateTime<Utc> {
        self.connected_at
    }

    /// Ask the signing agent to sign and broadcast a call from this account.
    pub async fn send_transaction(
        &self,
        to: WalletAddress,
        data: Vec<u8>,
    ) -> Result<Hash, SessionError> {
        self.signer
            .send_transaction(TransactionRequest {
                from: self.address,
                to,
                data,
            })
            .await
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("address", &self.address)
            .field("agent", &self.signer.agent_id())
            .field("connected_at", &self.connected_at)
            .finish()
    }
}
