//! # CT-03 Ledger Registry
//!
//! Client for the on-chain role registry.
//!
//! **Subsystem ID:** 03  
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! The registry contract is the single source of truth for who is a platform
//! admin, which wallet operates which police station, and which wallets are
//! registered citizens. Every operation here is a round trip to the ledger;
//! nothing is cached.
//!
//! ## Operations
//!
//! | Operation | Kind | Needs |
//! |-----------|------|-------|
//! | `is_platform_admin` | read | provider |
//! | `is_citizen` | read | provider |
//! | `get_station_by_wallet` | read | provider |
//! | `register_citizen` | write | session signer, waits for receipt |
//!
//! ## Module Structure
//!
//! ```text
//! ct-03-ledger-registry/
//! ├── abi.rs           # Solidity ABI codec for the registry calls
//! ├── domain/          # RegisterCitizenCall, RegistryError
//! ├── ports/           # RegistryReader + RegistryWriter (outbound)
//! ├── adapters/        # JSON-RPC registry, in-memory registry
//! └── config.rs        # RegistryConfig
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod abi;
pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;

// Re-exports
pub use adapters::{InMemoryRegistry, JsonRpcRegistry};
pub use config::RegistryConfig;
pub use domain::{RegisterCitizenCall, RegistryError};
pub use ports::{Registry, RegistryReader, RegistryWriter};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
