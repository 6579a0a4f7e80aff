//! # CT-01 Wallet Session
//!
//! Connection to the user's signing agent.
//!
//! **Subsystem ID:** 01  
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! A wallet address is the user's identity. This subsystem asks the external
//! signing agent which account is active and wraps it in a [`Session`] that
//! also carries the agent as a transaction-signing handle. No key material is
//! handled here.
//!
//! ## Module Structure
//!
//! ```text
//! ct-01-wallet-session/
//! ├── domain/          # Session, TransactionRequest, SessionError
//! ├── ports/           # WalletSessionApi (inbound) + SigningAgent (outbound)
//! ├── adapters/        # JSON-RPC signing agent
//! ├── application/     # WalletSessionManager
//! └── config.rs        # WalletConfig
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

// Re-exports
pub use adapters::JsonRpcSigningAgent;
pub use application::WalletSessionManager;
pub use config::WalletConfig;
pub use domain::{Session, SessionError, TransactionRequest};
pub use ports::{MockSigningAgent, SigningAgent, WalletSessionApi};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    #[test]
    fn test_version() {
        assert!(!super::VERSION.is_empty());
    }
}
