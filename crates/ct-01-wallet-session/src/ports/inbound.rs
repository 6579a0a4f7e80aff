//! # Inbound Ports
//!
//! API trait defining what the wallet session manager can do.

use async_trait::async_trait;

use crate::domain::{Session, SessionError};

/// Wallet Session API - inbound port.
#[async_trait]
pub trait WalletSessionApi: Send + Sync {
    /// Ask the signing agent for its active account and return a fresh
    /// session. Callable repeatedly; the user may switch accounts in between.
    async fn connect(&self) -> Result<Session, SessionError>;

    /// The most recently established session, if any.
    fn current_session(&self) -> Option<Session>;
}
