//! # Domain Module
//!
//! Core domain types for the wallet session.

pub mod entities;
pub mod errors;

pub use entities::*;
pub use errors::*;
