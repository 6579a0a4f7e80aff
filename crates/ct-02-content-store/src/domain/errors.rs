//! # Domain Errors

use shared_types::CivicError;
use thiserror::Error;

/// Content store errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// Store credentials are absent from the deployment.
    #[error("Pinata API credentials are not configured. Set CT_PINATA_API_KEY and CT_PINATA_API_SECRET in your environment.")]
    MissingCredentials,

    /// The store rejected the credentials.
    #[error("Pinata authentication failed. Check that CT_PINATA_API_KEY and CT_PINATA_API_SECRET match your Pinata project settings.")]
    AuthenticationFailed,

    /// The document has no content.
    #[error("No file provided for upload.")]
    EmptyDocument,

    /// The document could not be read from disk.
    #[error("Could not read document {path}: {reason}")]
    Unreadable {
        /// Path that was requested.
        path: String,
        /// I/O failure.
        reason: String,
    },

    /// Any other upload failure.
    #[error("Failed to upload document to IPFS. Please try again. ({0})")]
    UploadFailed(String),

    /// The store reported success but returned no identifier.
    #[error("Pinata response did not include a CID.")]
    MissingCid,
}

impl StorageError {
    /// Label used for metrics.
    pub fn outcome(&self) -> &'static str {
        match self {
            Self::MissingCredentials | Self::AuthenticationFailed => "auth_failed",
            Self::EmptyDocument | Self::Unreadable { .. } => "invalid_document",
            Self::UploadFailed(_) | Self::MissingCid => "failed",
        }
    }
}

impl From<StorageError> for CivicError {
    fn from(err: StorageError) -> Self {
        CivicError::Storage(err.to_string())
    }
}
