//! # Outbound Ports
//!
//! Read and write views of the registry contract.

use async_trait::async_trait;
use ct_01_wallet_session::Session;
use shared_types::{Station, TxReceipt, WalletAddress};

use crate::domain::{RegisterCitizenCall, RegistryError};

/// Read-only registry queries. Need only a ledger provider.
#[async_trait]
pub trait RegistryReader: Send + Sync {
    /// Whether `wallet` is a platform admin on-chain.
    async fn is_platform_admin(&self, wallet: WalletAddress) -> Result<bool, RegistryError>;

    /// Whether `wallet` has a citizen record.
    async fn is_citizen(&self, wallet: WalletAddress) -> Result<bool, RegistryError>;

    /// Station operated by `wallet`.
    ///
    /// `Ok(None)` means the registry has no mapping for the wallet; `Err`
    /// means the question could not be answered.
    async fn get_station_by_wallet(
        &self,
        wallet: WalletAddress,
    ) -> Result<Option<Station>, RegistryError>;
}

/// Registry writes. Signed by the session's signing agent.
#[async_trait]
pub trait RegistryWriter: Send + Sync {
    /// Register the session's wallet as a citizen and wait until the ledger
    /// confirms the transaction.
    async fn register_citizen(
        &self,
        session: &Session,
        call: RegisterCitizenCall,
    ) -> Result<TxReceipt, RegistryError>;
}

/// Full registry access.
pub trait Registry: RegistryReader + RegistryWriter {}

impl<T: RegistryReader + RegistryWriter> Registry for T {}
