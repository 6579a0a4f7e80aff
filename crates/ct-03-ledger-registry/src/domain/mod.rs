//! # Domain Module

pub mod calls;
pub mod errors;

pub use calls::*;
pub use errors::*;
