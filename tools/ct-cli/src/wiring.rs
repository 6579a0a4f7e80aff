//! Service construction.

use std::sync::Arc;

use anyhow::{Context, Result};
use ct_01_wallet_session::WalletSessionManager;
use ct_02_content_store::{ContentUploader, PinataContentStore};
use ct_03_ledger_registry::JsonRpcRegistry;
use ct_04_role_resolution::RoleResolver;
use ct_05_citizen_registration::RegistrationOrchestrator;

use crate::config::CliConfig;

/// Network-backed services.
pub struct Services {
    /// Signing agent connection.
    pub wallet: Arc<WalletSessionManager>,
    /// Login paths.
    pub resolver: RoleResolver,
    /// Citizen onboarding.
    pub orchestrator: RegistrationOrchestrator,
}

impl Services {
    /// Build every service from configuration. Nothing here touches the
    /// network; misconfiguration surfaces on first use.
    pub fn from_config(config: &CliConfig) -> Result<Self> {
        let wallet = Arc::new(
            WalletSessionManager::from_config(&config.wallet)
                .context("failed to set up signing agent client")?,
        );
        let registry = Arc::new(
            JsonRpcRegistry::new(config.registry.clone())
                .context("failed to set up ledger provider client")?,
        );
        let store = Arc::new(
            PinataContentStore::new(config.pinata.clone())
                .context("failed to set up content store client")?,
        );

        Ok(Self {
            wallet: wallet.clone(),
            resolver: RoleResolver::new(config.roles.clone(), registry.clone()),
            orchestrator: RegistrationOrchestrator::new(
                wallet,
                ContentUploader::new(store),
                registry,
            ),
        })
    }
}
