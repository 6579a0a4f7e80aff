//! # Adapters Layer (Hexagonal Architecture)
//!
//! Implements outbound port traits against real signing agents.

mod json_rpc_agent;

pub use json_rpc_agent::JsonRpcSigningAgent;
