//! # CT-02 Content Store
//!
//! Content-addressed storage for identity documents.
//!
//! **Subsystem ID:** 02  
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! A citizen's identity document is pinned off-chain and referenced from the
//! ledger only by its content identifier (CID). The store is credentialed;
//! an authentication failure is reported separately from any other upload
//! failure so the operator knows to fix the deployment rather than retry.
//!
//! ## Module Structure
//!
//! ```text
//! ct-02-content-store/
//! ├── domain/          # Document, StorageError
//! ├── ports/           # ContentStore (outbound)
//! ├── adapters/        # Pinata HTTP store, in-memory store
//! ├── service.rs       # ContentUploader (logging + metrics)
//! └── config.rs        # PinataConfig
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod service;

// Re-exports
pub use adapters::{InMemoryContentStore, PinataContentStore};
pub use config::PinataConfig;
pub use domain::{Document, StorageError};
pub use ports::ContentStore;
pub use service::ContentUploader;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
