//! # Shared Types Crate
//!
//! Identity entities, the normalization rule and the error taxonomy shared by
//! every Crime Trace subsystem.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: every cross-subsystem type is defined here.
//! - **One Comparison Rule**: wallet addresses and station codes are compared
//!   through [`normalize_identifier`] and nothing else.
//! - **No Raw Identity Numbers**: entities only ever hold a [`Fingerprint`]
//!   of a citizen's identity document.

pub mod entities;
pub mod errors;
pub mod normalization;

pub use entities::*;
pub use errors::*;
pub use normalization::{identifiers_match, normalize_identifier};
