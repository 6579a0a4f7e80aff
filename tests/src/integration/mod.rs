//! # Integration Tests
//!
//! Cross-subsystem flows over the in-memory platform.

pub mod login_flows;
pub mod registration_flows;
