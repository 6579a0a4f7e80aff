//! # Adapters Layer (Hexagonal Architecture)
//!
//! - `JsonRpcRegistry`: registry contract over a JSON-RPC provider
//! - `InMemoryRegistry`: contract-equivalent in-memory registry

mod json_rpc;
mod memory;

pub use json_rpc::JsonRpcRegistry;
pub use memory::InMemoryRegistry;
