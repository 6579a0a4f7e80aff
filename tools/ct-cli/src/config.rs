//! Environment configuration.

use std::env;

use ct_01_wallet_session::WalletConfig;
use ct_02_content_store::PinataConfig;
use ct_03_ledger_registry::RegistryConfig;
use ct_04_role_resolution::RoleResolutionConfig;
use tracing::warn;

/// Per-subsystem configuration assembled from `CT_*` variables.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Signing agent.
    pub wallet: WalletConfig,
    /// Document store.
    pub pinata: PinataConfig,
    /// Ledger registry.
    pub registry: RegistryConfig,
    /// Role resolution.
    pub roles: RoleResolutionConfig,
}

impl CliConfig {
    /// Load from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load from an arbitrary variable source. Values are kept raw; they are
    /// validated by the subsystem that uses them.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(url) = var("CT_SIGNER_URL") {
            config.wallet = WalletConfig::with_signer(url);
        }

        config.pinata.api_key = var("CT_PINATA_API_KEY");
        config.pinata.api_secret = var("CT_PINATA_API_SECRET");
        if let Some(endpoint) = var("CT_PINATA_ENDPOINT") {
            config.pinata.endpoint = endpoint;
        }

        if let Some(url) = var("CT_RPC_URL") {
            config.registry.rpc_url = url;
        }
        config.registry.contract_address = var("CT_REGISTRY_ADDRESS");
        if let Some(ms) = var("CT_RECEIPT_POLL_MS") {
            match ms.trim().parse() {
                Ok(ms) => config.registry.receipt_poll_interval_ms = ms,
                Err(_) => warn!("CT_RECEIPT_POLL_MS must be an integer, keeping default"),
            }
        }

        config.roles.admin_address = var("CT_ADMIN_ADDRESS");
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_map(pairs: &[(&str, &str)]) -> CliConfig {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        CliConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = from_map(&[]);
        assert!(config.wallet.signer_url.is_none());
        assert!(config.registry.contract_address.is_none());
        assert_eq!(config.registry.rpc_url, "http://127.0.0.1:8545");
        assert!(config.roles.admin_address.is_none());
        assert!(config.pinata.credentials().is_none());
    }

    #[test]
    fn test_all_variables() {
        let config = from_map(&[
            ("CT_SIGNER_URL", "http://127.0.0.1:8545"),
            ("CT_PINATA_API_KEY", "k"),
            ("CT_PINATA_API_SECRET", "s"),
            ("CT_PINATA_ENDPOINT", "http://pin.local/pin"),
            ("CT_RPC_URL", "http://rpc.local"),
            ("CT_REGISTRY_ADDRESS", "0x5FbDB2315678afecb367f032d93F642f64180aa3"),
            ("CT_RECEIPT_POLL_MS", "250"),
            ("CT_ADMIN_ADDRESS", "0x5B38Da6a701c568545dCfcB03FcB875f56beddC4"),
        ]);
        assert_eq!(config.wallet.signer_url.as_deref(), Some("http://127.0.0.1:8545"));
        assert_eq!(config.pinata.credentials(), Some(("k", "s")));
        assert_eq!(config.pinata.endpoint, "http://pin.local/pin");
        assert_eq!(config.registry.rpc_url, "http://rpc.local");
        assert_eq!(config.registry.receipt_poll_interval_ms, 250);
        assert!(config.registry.contract_address().is_ok());
        assert!(config.roles.admin_address().is_ok());
    }

    #[test]
    fn test_blank_values_are_absent() {
        let config = from_map(&[("CT_ADMIN_ADDRESS", "  "), ("CT_RECEIPT_POLL_MS", "soon")]);
        assert!(config.roles.admin_address.is_none());
        assert_eq!(config.registry.receipt_poll_interval_ms, 1_000);
    }
}
