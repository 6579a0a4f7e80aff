//! # Inbound Ports

use async_trait::async_trait;
use ct_01_wallet_session::Session;
use shared_types::CivicError;

use crate::domain::{RegistrationForm, RegistrationOutcome};

/// Citizen Registration API - inbound port.
#[async_trait]
pub trait CitizenRegistrationApi: Send + Sync {
    /// Register the wallet behind `session` (connecting first when `None`)
    /// and return once the ledger has confirmed the record.
    async fn register_citizen(
        &self,
        session: Option<&Session>,
        form: RegistrationForm,
    ) -> Result<RegistrationOutcome, CivicError>;
}
