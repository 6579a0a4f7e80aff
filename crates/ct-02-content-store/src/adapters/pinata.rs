//! Pinata Content Store Adapter
//!
//! Multipart `pinFileToIPFS` upload.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde_json::Value;
use shared_types::ContentId;
use tracing::{debug, warn};

use crate::config::PinataConfig;
use crate::domain::{Document, StorageError};
use crate::ports::ContentStore;

/// Substrings in an error message that indicate rejected credentials.
const AUTH_MARKERS: [&str; 3] = ["api key", "unauthorized", "forbidden"];

/// Keys a CID may be returned under.
const CID_KEYS: [&str; 3] = ["IpfsHash", "ipfsHash", "cid"];

/// Pinata-backed content store.
pub struct PinataContentStore {
    client: Client,
    config: PinataConfig,
}

impl PinataContentStore {
    /// Create a store from configuration. Credentials are not checked here.
    pub fn new(config: PinataConfig) -> Result<Self, StorageError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs.max(1)))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| StorageError::UploadFailed(e.to_string()))?;
        Ok(Self { client, config })
    }

    /// Configured endpoint.
    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }
}

#[async_trait]
impl ContentStore for PinataContentStore {
    async fn upload(&self, document: &Document) -> Result<ContentId, StorageError> {
        let (api_key, api_secret) = self
            .config
            .credentials()
            .ok_or(StorageError::MissingCredentials)?;
        if document.is_empty() {
            return Err(StorageError::EmptyDocument);
        }

        let part = Part::bytes(document.bytes.clone())
            .file_name(document.file_name.clone())
            .mime_str(&document.content_type)
            .map_err(|e| StorageError::UploadFailed(e.to_string()))?;
        let form = Form::new().part("file", part);

        debug!(
            "[ct-02] Pinning {} ({} bytes) to {}",
            document.file_name,
            document.len(),
            self.config.endpoint
        );

        let response = self
            .client
            .post(&self.config.endpoint)
            .header("pinata_api_key", api_key)
            .header("pinata_secret_api_key", api_secret)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                warn!("[ct-02] Upload request failed: {}", e);
                StorageError::UploadFailed(e.to_string())
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            warn!("[ct-02] Could not read upload response: {}", e);
            StorageError::UploadFailed(format!("reading response body: {e}"))
        })?;
        let payload = serde_json::from_str::<Value>(&body).ok();

        interpret_response(status.as_u16(), status.canonical_reason(), payload.as_ref())
    }

    fn name(&self) -> &str {
        "pinata"
    }
}

/// Turn an HTTP status and optional JSON payload into an upload outcome.
fn interpret_response(
    status: u16,
    reason: Option<&str>,
    payload: Option<&Value>,
) -> Result<ContentId, StorageError> {
    if !(200..300).contains(&status) {
        let message = payload
            .and_then(|p| p.get("error").or_else(|| p.get("message")))
            .map(|v| match v {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .unwrap_or_else(|| format!("HTTP {} {}", status, reason.unwrap_or("")).trim().to_string());

        let lower = message.to_lowercase();
        if status == 401 || status == 403 || AUTH_MARKERS.iter().any(|m| lower.contains(m)) {
            warn!("[ct-02] Store rejected credentials: {}", message);
            return Err(StorageError::AuthenticationFailed);
        }
        return Err(StorageError::UploadFailed(message));
    }

    payload
        .and_then(|p| {
            CID_KEYS
                .iter()
                .find_map(|key| p.get(*key).and_then(Value::as_str))
        })
        .filter(|cid| !cid.trim().is_empty())
        .map(ContentId::new)
        .ok_or(StorageError::MissingCid)
}
