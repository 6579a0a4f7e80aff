//! Crypto error types.

use shared_types::CivicError;
use thiserror::Error;

/// Hashing errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CryptoError {
    /// Invalid input for a hashing operation
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<CryptoError> for CivicError {
    fn from(err: CryptoError) -> Self {
        match err {
            CryptoError::InvalidInput(reason) => CivicError::InvalidInput(reason),
        }
    }
}
