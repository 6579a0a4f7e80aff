//! # Domain Module

pub mod messages;

use serde::Serialize;
use shared_types::{Role, WalletAddress};

/// A successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginGrant {
    /// Wallet that logged in.
    pub wallet: WalletAddress,
    /// Role granted for this attempt.
    pub role: Role,
}

impl LoginGrant {
    /// Greeting for the granted role.
    pub fn message(&self) -> &'static str {
        self.role.welcome_message()
    }
}
