//! # Shared Crypto - Hashing Primitives
//!
//! | Module | Algorithm | Use Case |
//! |--------|-----------|----------|
//! | `hashing` | Keccak-256 | ABI selectors, transaction ids |
//! | `credential` | Keccak-256 over `type:number` | Citizen identity fingerprints |
//!
//! No key material lives here. Signing belongs to the external signing agent.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod credential;
pub mod errors;
pub mod hashing;

// Re-exports
pub use credential::{credential_preimage, fingerprint};
pub use errors::CryptoError;
pub use hashing::{keccak256, keccak256_many, Keccak256Hasher};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
