//! # Crime Trace Test Suite
//!
//! Unified test crate for flows that cross subsystem boundaries.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── fixtures.rs            # Wired in-memory platform
//! └── integration/
//!     ├── login_flows.rs         # admin / station / citizen paths
//!     └── registration_flows.rs  # onboarding, then citizen login
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p ct-tests
//! cargo test -p ct-tests integration::login_flows::
//! ```

pub mod fixtures;
pub mod integration;
