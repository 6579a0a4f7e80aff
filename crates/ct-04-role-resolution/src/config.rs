//! # Role Resolution Configuration

use serde::{Deserialize, Serialize};
use shared_types::{CivicError, WalletAddress};

use crate::domain::messages;

/// Deployment settings for role resolution.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RoleResolutionConfig {
    /// Platform admin wallet, as configured. Never sufficient on its own;
    /// the registry must also confirm it.
    pub admin_address: Option<String>,
}

impl RoleResolutionConfig {
    /// Config with an admin address.
    pub fn with_admin(address: impl Into<String>) -> Self {
        Self {
            admin_address: Some(address.into()),
        }
    }

    /// The configured admin as written, after checking it is a valid address.
    pub fn admin_address(&self) -> Result<&str, CivicError> {
        let raw = self
            .admin_address
            .as_deref()
            .map(str::trim)
            .filter(|raw| !raw.is_empty())
            .ok_or_else(|| CivicError::Configuration(messages::ADMIN_NOT_CONFIGURED.to_string()))?;

        raw.parse::<WalletAddress>()
            .map_err(|e| CivicError::Configuration(format!("CT_ADMIN_ADDRESS is invalid: {e}")))?;
        Ok(raw)
    }
}
