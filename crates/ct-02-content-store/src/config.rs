//! # Content Store Configuration

use serde::{Deserialize, Serialize};

/// Pinata pin-file endpoint.
pub const DEFAULT_PINATA_ENDPOINT: &str = "https://api.pinata.cloud/pinning/pinFileToIPFS";

/// Pinata credentials and endpoint.
///
/// Credentials stay optional here; their absence is reported as
/// [`StorageError::MissingCredentials`](crate::StorageError::MissingCredentials)
/// on the first upload, before any request is made.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PinataConfig {
    /// API key.
    pub api_key: Option<String>,
    /// API secret.
    pub api_secret: Option<String>,
    /// Pin endpoint URL.
    pub endpoint: String,
    /// Transport timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for PinataConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_secret: None,
            endpoint: DEFAULT_PINATA_ENDPOINT.to_string(),
            request_timeout_secs: 120,
        }
    }
}

impl PinataConfig {
    /// Create a config for testing (placeholder credentials, local endpoint).
    pub fn for_testing() -> Self {
        Self {
            api_key: Some("test-key".to_string()),
            api_secret: Some("test-secret".to_string()),
            endpoint: "http://127.0.0.1:9/pinning/pinFileToIPFS".to_string(),
            request_timeout_secs: 2,
        }
    }

    /// Both credentials, if both are present and non-blank.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        let key = self.api_key.as_deref().map(str::trim).filter(|k| !k.is_empty())?;
        let secret = self
            .api_secret
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())?;
        Some((key, secret))
    }
}
