//! # Error Types
//!
//! The error taxonomy every identity operation reports through. Each variant
//! carries a reason string that can be shown to the user verbatim.

use thiserror::Error;

/// A wallet address string that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressParseError {
    /// The value is empty after trimming.
    #[error("address is empty")]
    Empty,

    /// The value does not start with `0x`.
    #[error("address must start with 0x: {0}")]
    MissingPrefix(String),

    /// The value is not 20 bytes of hex.
    #[error("address must be 40 hex characters: {0}")]
    InvalidHex(String),
}

/// Local problems with a registration form. These never reach the network.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The consent box was not ticked.
    #[error("You must agree to the Terms and Privacy Policy to register.")]
    ConsentRequired,

    /// Full name missing.
    #[error("Full name is required.")]
    MissingFullName,

    /// ID type missing.
    #[error("ID type is required.")]
    MissingIdType,

    /// ID number missing.
    #[error("ID number is required.")]
    MissingIdNumber,

    /// No identity document selected.
    #[error("Please upload your ID document.")]
    MissingDocument,
}

/// Workspace-wide error taxonomy.
///
/// Role-resolution failures (`NotAuthorized`, `NotFound`) both deny access;
/// there is no partial-privilege outcome.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CivicError {
    /// Missing or malformed deployment configuration. Never retried.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// No compatible signing agent in the execution environment.
    #[error("No signing agent: {0}")]
    NoSigningAgent(String),

    /// The user rejected the request in their signing agent.
    #[error("Cancelled by user: {0}")]
    UserCancelled(String),

    /// A registration form precondition failed.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Empty or missing input to a pure function.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The document upload failed; no ledger write was attempted.
    #[error("Storage error: {0}")]
    Storage(String),

    /// The ledger rejected or reverted a write, or a ledger round trip failed.
    #[error("Ledger error: {0}")]
    Ledger(String),

    /// The wallet does not hold the requested role.
    #[error("Not authorized: {0}")]
    NotAuthorized(String),

    /// The wallet has no record for the requested role.
    #[error("Not found: {0}")]
    NotFound(String),
}

impl CivicError {
    /// Short stable label for logs and metrics.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Configuration(_) => "configuration",
            Self::NoSigningAgent(_) => "no_signing_agent",
            Self::UserCancelled(_) => "user_cancelled",
            Self::Validation(_) => "validation",
            Self::InvalidInput(_) => "invalid_input",
            Self::Storage(_) => "storage",
            Self::Ledger(_) => "ledger",
            Self::NotAuthorized(_) => "not_authorized",
            Self::NotFound(_) => "not_found",
        }
    }

    /// True for role-resolution denials.
    pub fn is_denial(&self) -> bool {
        matches!(self, Self::NotAuthorized(_) | Self::NotFound(_))
    }
}
