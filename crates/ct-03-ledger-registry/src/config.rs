//! # Registry Configuration

use serde::{Deserialize, Serialize};
use shared_types::WalletAddress;

use crate::domain::RegistryError;

/// Default local development provider.
pub const DEFAULT_RPC_URL: &str = "http://127.0.0.1:8545";

/// Ledger provider and contract location.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// JSON-RPC provider used for reads and receipt polling.
    pub rpc_url: String,
    /// Registry contract address, unvalidated. Checked on every operation.
    pub contract_address: Option<String>,
    /// Delay between receipt polls in milliseconds.
    pub receipt_poll_interval_ms: u64,
    /// Transport timeout for provider requests in seconds.
    pub request_timeout_secs: u64,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            rpc_url: DEFAULT_RPC_URL.to_string(),
            contract_address: None,
            receipt_poll_interval_ms: 1_000,
            request_timeout_secs: 30,
        }
    }
}

impl RegistryConfig {
    /// Create a config for testing (fast polling, fixed contract address).
    pub fn for_testing() -> Self {
        Self {
            rpc_url: "http://127.0.0.1:9".to_string(),
            contract_address: Some("0x5FbDB2315678afecb367f032d93F642f64180aa3".to_string()),
            receipt_poll_interval_ms: 10,
            request_timeout_secs: 2,
        }
    }

    /// Parsed contract address.
    pub fn contract_address(&self) -> Result<WalletAddress, RegistryError> {
        let raw = self
            .contract_address
            .as_deref()
            .map(str::trim)
            .filter(|raw| !raw.is_empty())
            .ok_or_else(|| {
                RegistryError::Configuration(
                    "Registry contract address is not configured (CT_REGISTRY_ADDRESS).".to_string(),
                )
            })?;

        raw.parse().map_err(|_| {
            RegistryError::Configuration(
                "Registry contract address in CT_REGISTRY_ADDRESS is invalid. Please set it to a valid 0x... address for the current network.".to_string(),
            )
        })
    }
}
