//! # Wallet Session Manager
//!
//! Obtains the active account from the signing agent and keeps the most
//! recent session for read access.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::{debug, info, warn};

use crate::adapters::JsonRpcSigningAgent;
use crate::config::WalletConfig;
use crate::domain::{Session, SessionError};
use crate::ports::{SigningAgent, WalletSessionApi};

/// Message reported when no signing agent is present.
const NO_AGENT_MESSAGE: &str = "No wallet found. Please install a browser wallet to continue.";

/// Wallet Session Manager.
///
/// Holds no keys. Concurrent `connect` calls each get their own session; the
/// last one to finish becomes `current_session`.
pub struct WalletSessionManager {
    agent: Option<Arc<dyn SigningAgent>>,
    current: RwLock<Option<Session>>,
}

impl WalletSessionManager {
    /// Create a manager over an agent, or over nothing when the environment
    /// has no signing agent.
    pub fn new(agent: Option<Arc<dyn SigningAgent>>) -> Self {
        Self {
            agent,
            current: RwLock::new(None),
        }
    }

    /// Create a manager with a specific agent.
    pub fn with_agent(agent: Arc<dyn SigningAgent>) -> Self {
        Self::new(Some(agent))
    }

    /// Build from configuration, wiring the JSON-RPC agent if one is set.
    pub fn from_config(config: &WalletConfig) -> Result<Self, SessionError> {
        let agent = match config.signer_url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => {
                let agent = JsonRpcSigningAgent::new(
                    url,
                    Duration::from_secs(config.request_timeout_secs.max(1)),
                )?;
                Some(Arc::new(agent) as Arc<dyn SigningAgent>)
            }
            _ => None,
        };
        Ok(Self::new(agent))
    }

    /// Whether a signing agent is present at all.
    pub fn has_agent(&self) -> bool {
        self.agent.is_some()
    }
}

#[async_trait]
impl WalletSessionApi for WalletSessionManager {
    async fn connect(&self) -> Result<Session, SessionError> {
        let agent = self.agent.as_ref().ok_or_else(|| {
            warn!("[ct-01] Connect requested but no signing agent is configured");
            SessionError::NoSigningAgent(NO_AGENT_MESSAGE.to_string())
        })?;

        let accounts = agent.request_accounts().await.map_err(|e| {
            info!("[ct-01] Account request via {} failed: {}", agent.agent_id(), e);
            e
        })?;

        let address = accounts.first().copied().ok_or(SessionError::NoAccounts)?;
        let session = Session::new(address, Arc::clone(agent));

        debug!("[ct-01] Connected {} via {}", address, agent.agent_id());
        *self.current.write() = Some(session.clone());
        Ok(session)
    }

    fn current_session(&self) -> Option<Session> {
        self.current.read().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::MockSigningAgent;
    use shared_types::{CivicError, WalletAddress};

    fn addr(b: u8) -> WalletAddress {
        WalletAddress([b; 20])
    }

    #[tokio::test]
    async fn test_connect_returns_first_account() {
        let agent = Arc::new(MockSigningAgent::default());
        agent.set_accounts(vec![addr(1), addr(2)]);
        let manager = WalletSessionManager::with_agent(agent);

        let session = manager.connect().await.unwrap();
        assert_eq!(session.address(), addr(1));
        assert_eq!(manager.current_session().unwrap().address(), addr(1));
    }

    #[tokio::test]
    async fn test_no_agent() {
        let manager = WalletSessionManager::new(None);
        let err = manager.connect().await.unwrap_err();
        assert!(matches!(err, SessionError::NoSigningAgent(_)));
        assert!(matches!(
            CivicError::from(err),
            CivicError::NoSigningAgent(_)
        ));
        assert!(manager.current_session().is_none());
    }

    #[tokio::test]
    async fn test_user_rejection_is_cancellation() {
        let manager = WalletSessionManager::with_agent(Arc::new(MockSigningAgent::rejecting_accounts()));
        let err = manager.connect().await.unwrap_err();
        assert!(matches!(CivicError::from(err), CivicError::UserCancelled(_)));
    }

    #[tokio::test]
    async fn test_empty_account_list() {
        let agent = Arc::new(MockSigningAgent::default());
        agent.set_accounts(vec![]);
        let manager = WalletSessionManager::with_agent(agent);
        assert!(matches!(
            manager.connect().await,
            Err(SessionError::NoAccounts)
        ));
    }

    #[tokio::test]
    async fn test_reconnect_observes_account_switch() {
        let agent = Arc::new(MockSigningAgent::with_account(addr(1)));
        let manager = WalletSessionManager::with_agent(agent.clone());

        let first = manager.connect().await.unwrap();
        agent.set_accounts(vec![addr(2)]);
        let second = manager.connect().await.unwrap();

        assert_eq!(first.address(), addr(1));
        assert_eq!(second.address(), addr(2));
        assert_eq!(manager.current_session().unwrap().address(), addr(2));
    }

    #[test]
    fn test_from_config_without_signer() {
        let manager = WalletSessionManager::from_config(&WalletConfig::for_testing()).unwrap();
        assert!(!manager.has_agent());

        let manager =
            WalletSessionManager::from_config(&WalletConfig::with_signer("http://127.0.0.1:8545"))
                .unwrap();
        assert!(manager.has_agent());
    }
}
