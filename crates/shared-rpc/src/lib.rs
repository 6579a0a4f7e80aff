//! # Shared RPC
//!
//! JSON-RPC 2.0 over HTTP, used for both the ledger provider (`eth_call`,
//! `eth_getTransactionReceipt`) and the signing agent (`eth_requestAccounts`,
//! `eth_sendTransaction`).

mod client;
mod types;

pub use client::{JsonRpcClient, RpcError};
pub use types::*;
