//! In-memory content store.

use async_trait::async_trait;
use parking_lot::Mutex;
use shared_crypto::keccak256;
use shared_types::ContentId;

use crate::domain::{Document, StorageError};
use crate::ports::ContentStore;

/// In-memory store. Without a fixed CID, identifiers are derived from the
/// document bytes, so identical documents share a CID.
#[derive(Default)]
pub struct InMemoryContentStore {
    fixed_cid: Option<String>,
    failure: Option<StorageError>,
    uploads: Mutex<Vec<(ContentId, Document)>>,
}

impl InMemoryContentStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that answers every upload with `cid`.
    pub fn with_fixed_cid(cid: impl Into<String>) -> Self {
        Self {
            fixed_cid: Some(cid.into()),
            ..Default::default()
        }
    }

    /// Store that fails every upload with `error`.
    pub fn failing(error: StorageError) -> Self {
        Self {
            failure: Some(error),
            ..Default::default()
        }
    }

    /// Number of upload attempts that reached the store.
    pub fn upload_count(&self) -> usize {
        self.uploads.lock().len()
    }

    /// Successfully stored documents.
    pub fn stored(&self) -> Vec<(ContentId, Document)> {
        self.uploads.lock().clone()
    }
}

#[async_trait]
impl ContentStore for InMemoryContentStore {
    async fn upload(&self, document: &Document) -> Result<ContentId, StorageError> {
        if let Some(err) = &self.failure {
            // Record the attempt with a placeholder id so callers can count it.
            self.uploads
                .lock()
                .push((ContentId::new(""), document.clone()));
            return Err(err.clone());
        }
        if document.is_empty() {
            return Err(StorageError::EmptyDocument);
        }

        let cid = match &self.fixed_cid {
            Some(cid) => ContentId::new(cid.clone()),
            None => ContentId::new(format!("bafy{}", hex::encode(keccak256(&document.bytes)))),
        };
        self.uploads.lock().push((cid.clone(), document.clone()));
        Ok(cid)
    }

    fn name(&self) -> &str {
        "in-memory"
    }
}
