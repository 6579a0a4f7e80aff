//! CT-CLI: Crime Trace command line.
//!
//! Wires the network-backed adapters from environment configuration and
//! exposes the login and registration flows.

pub mod commands;
pub mod config;
pub mod wiring;
