//! # Domain Module

pub mod document;
pub mod errors;

pub use document::*;
pub use errors::*;
