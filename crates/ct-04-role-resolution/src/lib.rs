//! # CT-04 Role Resolution
//!
//! Decides which role a wallet may log in with.
//!
//! **Subsystem ID:** 04  
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Paths
//!
//! The caller picks the path explicitly; roles are never sniffed.
//!
//! | Path | Checks | Denial |
//! |------|--------|--------|
//! | Admin | configured address, then on-chain membership | `NotAuthorized` |
//! | Station | claim present, active station for wallet, code matches claim | `NotAuthorized` |
//! | Citizen | on-chain citizen record | `NotFound` |
//!
//! Every check is a fresh registry round trip. Nothing is cached between
//! attempts or across paths, so replaying an attempt against the same
//! registry state gives the same answer.
//!
//! ## Module Structure
//!
//! ```text
//! ct-04-role-resolution/
//! ├── domain/          # LoginGrant, denial messages
//! ├── ports/           # RoleResolutionApi (inbound)
//! ├── service.rs       # RoleResolver
//! └── config.rs        # RoleResolutionConfig
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod domain;
pub mod ports;
pub mod service;

// Re-exports
pub use config::RoleResolutionConfig;
pub use domain::LoginGrant;
pub use ports::RoleResolutionApi;
pub use service::RoleResolver;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
