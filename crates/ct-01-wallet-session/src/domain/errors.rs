//! # Domain Errors

use shared_types::CivicError;
use thiserror::Error;

/// Wallet session error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// No compatible signing agent is present.
    #[error("No Ethereum wallet detected: {0}")]
    NoSigningAgent(String),

    /// The user declined the request in the signing agent.
    #[error("Request rejected in wallet: {0}")]
    UserRejected(String),

    /// The agent answered but exposed no account.
    #[error("Wallet exposed no accounts")]
    NoAccounts,

    /// The agent answered with something that is not what was asked for.
    #[error("Invalid signing agent response: {0}")]
    InvalidResponse(String),

    /// The agent refused or failed the request for another reason.
    #[error("Signing agent error: {0}")]
    Agent(String),
}

impl From<SessionError> for CivicError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::NoSigningAgent(reason) => CivicError::NoSigningAgent(reason),
            SessionError::UserRejected(reason) => CivicError::UserCancelled(reason),
            SessionError::NoAccounts => {
                CivicError::UserCancelled("wallet exposed no accounts".to_string())
            }
            other => CivicError::NoSigningAgent(other.to_string()),
        }
    }
}
