//! # Application Layer
//!
//! Session manager service.

mod service;

pub use service::WalletSessionManager;
