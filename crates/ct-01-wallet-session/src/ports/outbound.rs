//! # Outbound Ports
//!
//! The external signing agent.

use async_trait::async_trait;
use parking_lot::{Mutex, RwLock};
use shared_types::{Hash, WalletAddress};

use crate::domain::{SessionError, TransactionRequest};

/// Signing agent - outbound port.
///
/// Exposes an address-request capability and a signer able to send a write
/// transaction. Keys never leave the agent.
#[async_trait]
pub trait SigningAgent: Send + Sync {
    /// Request the accounts the user has exposed, active account first.
    async fn request_accounts(&self) -> Result<Vec<WalletAddress>, SessionError>;

    /// Sign and broadcast a transaction, returning its hash.
    async fn send_transaction(&self, tx: TransactionRequest) -> Result<Hash, SessionError>;

    /// Agent identifier (for logging/debugging).
    fn agent_id(&self) -> &str;
}

// =============================================================================
// Mock Implementation for Testing
// =============================================================================

/// Mock signing agent for testing.
pub struct MockSigningAgent {
    id: String,
    accounts: RwLock<Vec<WalletAddress>>,
    reject_accounts: bool,
    reject_transactions: bool,
    sent: Mutex<Vec<TransactionRequest>>,
}

impl Default for MockSigningAgent {
    fn default() -> Self {
        Self {
            id: "mock-agent".to_string(),
            accounts: RwLock::new(vec![WalletAddress([0x11; 20])]),
            reject_accounts: false,
            reject_transactions: false,
            sent: Mutex::new(Vec::new()),
        }
    }
}

impl MockSigningAgent {
    /// Agent exposing a single account.
    pub fn with_account(address: WalletAddress) -> Self {
        Self {
            accounts: RwLock::new(vec![address]),
            ..Default::default()
        }
    }

    /// Agent whose user declines the account request.
    pub fn rejecting_accounts() -> Self {
        Self {
            reject_accounts: true,
            ..Default::default()
        }
    }

    /// Agent whose user declines every signature.
    pub fn rejecting_transactions(address: WalletAddress) -> Self {
        Self {
            reject_transactions: true,
            ..Self::with_account(address)
        }
    }

    /// Simulate the user switching accounts in the agent.
    pub fn set_accounts(&self, accounts: Vec<WalletAddress>) {
        *self.accounts.write() = accounts;
    }

    /// Transactions the agent was asked to sign.
    pub fn sent_transactions(&self) -> Vec<TransactionRequest> {
        self.sent.lock().clone()
    }
}

#[async_trait]
impl SigningAgent for MockSigningAgent {
    async fn request_accounts(&self) -> Result<Vec<WalletAddress>, SessionError> {
        if self.reject_accounts {
            return Err(SessionError::UserRejected(
                "User rejected the request.".to_string(),
            ));
        }
        Ok(self.accounts.read().clone())
    }

    async fn send_transaction(&self, tx: TransactionRequest) -> Result<Hash, SessionError> {
        if self.reject_transactions {
            return Err(SessionError::UserRejected(
                "User denied transaction signature.".to_string(),
            ));
        }
        let mut sent = self.sent.lock();
        sent.push(tx);
        let mut hash = [0u8; 32];
        hash[24..].copy_from_slice(&(sent.len() as u64).to_be_bytes());
        Ok(hash)
    }

    fn agent_id(&self) -> &str {
        &self.id
    }
}
