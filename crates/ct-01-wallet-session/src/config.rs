//! # Wallet Session Configuration

use serde::{Deserialize, Serialize};

/// Signing agent configuration.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct WalletConfig {
    /// JSON-RPC endpoint of the signing agent. `None` means no signing agent
    /// is present in this environment.
    pub signer_url: Option<String>,

    /// Transport timeout for agent requests in seconds. Signing prompts wait
    /// on a human, so this is generous.
    pub request_timeout_secs: u64,
}

impl WalletConfig {
    /// Config pointing at a signing agent.
    pub fn with_signer(url: impl Into<String>) -> Self {
        Self {
            signer_url: Some(url.into()),
            request_timeout_secs: 300,
        }
    }

    /// Create a config for testing (no agent, short timeout).
    pub fn for_testing() -> Self {
        Self {
            signer_url: None,
            request_timeout_secs: 5,
        }
    }
}
