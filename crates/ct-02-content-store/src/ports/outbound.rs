//! # Outbound Ports

use async_trait::async_trait;
use shared_types::ContentId;

use crate::domain::{Document, StorageError};

/// Content-addressed store - outbound port.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Upload a document and return its content identifier.
    async fn upload(&self, document: &Document) -> Result<ContentId, StorageError>;

    /// Store name for logs.
    fn name(&self) -> &str;
}
