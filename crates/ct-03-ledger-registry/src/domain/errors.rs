//! # Domain Errors

use ct_01_wallet_session::SessionError;
use shared_types::CivicError;
use thiserror::Error;

/// Registry client errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Contract address missing or malformed. Raised before any network call.
    #[error("{0}")]
    Configuration(String),

    /// The provider could not be reached or answered unintelligibly.
    #[error("Ledger provider error: {0}")]
    Transport(String),

    /// The contract reverted the call or the transaction.
    #[error("Transaction reverted: {0}")]
    Reverted(String),

    /// The contract returned data that does not match the expected layout.
    #[error("Malformed registry response: {0}")]
    Decode(String),

    /// The signing agent failed to submit the write.
    #[error(transparent)]
    Session(#[from] SessionError),
}

impl From<RegistryError> for CivicError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::Configuration(reason) => CivicError::Configuration(reason),
            RegistryError::Session(SessionError::NoSigningAgent(reason)) => {
                CivicError::NoSigningAgent(reason)
            }
            // A declined signature rejects the write itself.
            other => CivicError::Ledger(other.to_string()),
        }
    }
}
