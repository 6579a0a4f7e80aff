//! # Registration Outcome

use serde::Serialize;
use shared_types::{ContentId, TxReceipt, WalletAddress};

/// Shown once the registration is confirmed.
pub const REGISTRATION_SUCCESS_MESSAGE: &str =
    "Registration successful. You can now login as a citizen.";

/// A confirmed citizen registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationOutcome {
    /// Registered wallet.
    pub wallet: WalletAddress,
    /// Ledger confirmation.
    pub receipt: TxReceipt,
    /// CID of the uploaded identity document.
    pub document_cid: ContentId,
}

impl RegistrationOutcome {
    /// User-facing confirmation.
    pub fn message(&self) -> &'static str {
        REGISTRATION_SUCCESS_MESSAGE
    }
}
