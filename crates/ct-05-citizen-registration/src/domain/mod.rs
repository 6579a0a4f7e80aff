//! # Domain Module

pub mod form;
pub mod outcome;

pub use form::*;
pub use outcome::*;
