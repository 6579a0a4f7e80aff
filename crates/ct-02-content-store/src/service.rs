//! # Content Uploader
//!
//! Wraps a [`ContentStore`] with logging and upload counters.

use std::sync::Arc;

use ct_telemetry::record_upload;
use shared_types::ContentId;
use tracing::{info, warn};

use crate::domain::{Document, StorageError};
use crate::ports::ContentStore;

/// Uploads documents to the configured store.
#[derive(Clone)]
pub struct ContentUploader {
    store: Arc<dyn ContentStore>,
}

impl ContentUploader {
    /// Wrap a store.
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        Self { store }
    }

    /// Upload `document` and return its CID.
    pub async fn upload(&self, document: &Document) -> Result<ContentId, StorageError> {
        match self.store.upload(document).await {
            Ok(cid) => {
                info!(cid = %cid, store = self.store.name(), "[ct-02] Document pinned");
                record_upload("success");
                Ok(cid)
            }
            Err(err) => {
                warn!(store = self.store.name(), "[ct-02] Document upload failed: {}", err);
                record_upload(err.outcome());
                Err(err)
            }
        }
    }
}
