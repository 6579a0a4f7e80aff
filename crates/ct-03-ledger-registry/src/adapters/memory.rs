//! In-memory registry.
//!
//! Mirrors the contract's rules (one citizen record per wallet, station
//! lookup by operating wallet) and counts calls so tests can assert which
//! round trips happened.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use ct_01_wallet_session::Session;
use parking_lot::RwLock;
use shared_types::{Citizen, Station, TxReceipt, WalletAddress};

use crate::abi::{self, Token};
use crate::domain::{RegisterCitizenCall, RegistryError};
use crate::ports::{RegistryReader, RegistryWriter};

/// Address the in-memory contract pretends to live at.
const IN_MEMORY_CONTRACT: WalletAddress = WalletAddress([0xc7; 20]);

#[derive(Default)]
struct RegistryState {
    admins: HashSet<WalletAddress>,
    citizens: HashMap<WalletAddress, Citizen>,
    stations: HashMap<WalletAddress, Station>,
}

/// In-memory registry.
#[derive(Default)]
pub struct InMemoryRegistry {
    state: RwLock<RegistryState>,
    reads: AtomicUsize,
    write_attempts: AtomicUsize,
    block_number: AtomicU64,
    fail_reads: AtomicBool,
}

impl InMemoryRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Grant on-chain admin membership.
    pub fn add_admin(&self, wallet: WalletAddress) {
        self.state.write().admins.insert(wallet);
    }

    /// Map a station to its operating wallet.
    pub fn add_station(&self, station: Station) {
        self.state.write().stations.insert(station.wallet, station);
    }

    /// Seed a citizen record.
    pub fn add_citizen(&self, citizen: Citizen) {
        self.state.write().citizens.insert(citizen.wallet, citizen);
    }

    /// Citizen record for `wallet`.
    pub fn citizen(&self, wallet: WalletAddress) -> Option<Citizen> {
        self.state.read().citizens.get(&wallet).cloned()
    }

    /// Make every read fail with a transport error.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.fail_reads.store(unavailable, Ordering::SeqCst);
    }

    /// Number of read round trips served.
    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    /// Number of write attempts received.
    pub fn write_attempts(&self) -> usize {
        self.write_attempts.load(Ordering::SeqCst)
    }

    /// Contract address writes are sent to.
    pub fn contract_address(&self) -> WalletAddress {
        IN_MEMORY_CONTRACT
    }

    fn begin_read(&self) -> Result<(), RegistryError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(RegistryError::Transport("registry unavailable".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl RegistryReader for InMemoryRegistry {
    async fn is_platform_admin(&self, wallet: WalletAddress) -> Result<bool, RegistryError> {
        self.begin_read()?;
        Ok(self.state.read().admins.contains(&wallet))
    }

    async fn is_citizen(&self, wallet: WalletAddress) -> Result<bool, RegistryError> {
        self.begin_read()?;
        Ok(self.state.read().citizens.contains_key(&wallet))
    }

    async fn get_station_by_wallet(
        &self,
        wallet: WalletAddress,
    ) -> Result<Option<Station>, RegistryError> {
        self.begin_read()?;
        Ok(self.state.read().stations.get(&wallet).cloned())
    }
}

#[async_trait]
impl RegistryWriter for InMemoryRegistry {
    async fn register_citizen(
        &self,
        session: &Session,
        call: RegisterCitizenCall,
    ) -> Result<TxReceipt, RegistryError> {
        self.write_attempts.fetch_add(1, Ordering::SeqCst);

        let data = abi::encode_call(
            abi::REGISTER_CITIZEN,
            &[
                Token::String(call.alias_name.clone()),
                Token::String(call.id_type.clone()),
                Token::FixedBytes(call.id_fingerprint.0),
                Token::String(call.metadata.clone()),
            ],
        );
        let tx_hash = session.send_transaction(IN_MEMORY_CONTRACT, data).await?;

        let wallet = session.address();
        let mut state = self.state.write();
        if state.citizens.contains_key(&wallet) {
            return Err(RegistryError::Reverted("Citizen already registered".to_string()));
        }

        state.citizens.insert(
            wallet,
            Citizen {
                wallet,
                alias_name: call.alias_name,
                id_type: call.id_type,
                id_fingerprint: call.id_fingerprint,
                metadata: call.metadata,
                registered_at: Utc::now().timestamp().max(0) as u64,
            },
        );

        Ok(TxReceipt {
            tx_hash,
            block_number: self.block_number.fetch_add(1, Ordering::SeqCst) + 1,
            from: wallet,
            success: true,
        })
    }
}
