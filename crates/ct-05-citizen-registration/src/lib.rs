//! # CT-05 Citizen Registration
//!
//! Onboards a wallet as a citizen.
//!
//! **Subsystem ID:** 05  
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Flow
//!
//! ```text
//! form ──validate──► session ──► upload document ──► fingerprint(idType, idNumber)
//!                                      │                        │
//!                                      └──── CID ──► metadata ◄─┘
//!                                                       │
//!                              registerCitizen(alias, idType, fingerprint, metadata)
//!                                                       │
//!                                                  receipt
//! ```
//!
//! Validation happens before any network call. A failed upload means no
//! ledger write is attempted. The identity number is hashed locally and is
//! never sent anywhere.
//!
//! ## Module Structure
//!
//! ```text
//! ct-05-citizen-registration/
//! ├── domain/          # RegistrationForm, RegistrationOutcome
//! ├── ports/           # CitizenRegistrationApi (inbound)
//! └── service.rs       # RegistrationOrchestrator
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod domain;
pub mod ports;
pub mod service;

// Re-exports
pub use domain::{RegistrationForm, RegistrationOutcome, REGISTRATION_SUCCESS_MESSAGE};
pub use ports::CitizenRegistrationApi;
pub use service::RegistrationOrchestrator;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
