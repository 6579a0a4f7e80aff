//! Shared test fixtures: an in-memory platform wired the same way the CLI
//! wires the network-backed one.

use std::sync::Arc;

use ct_01_wallet_session::{MockSigningAgent, Session, WalletSessionManager};
use ct_02_content_store::{ContentUploader, Document, InMemoryContentStore};
use ct_03_ledger_registry::InMemoryRegistry;
use ct_04_role_resolution::{RoleResolutionConfig, RoleResolver};
use ct_05_citizen_registration::{RegistrationForm, RegistrationOrchestrator};
use shared_types::{Station, WalletAddress};

/// Configured platform admin (checksummed spelling).
pub const ADMIN: &str = "0x5B38Da6a701c568545dCfcB03FcB875f56beddC4";

/// The configured admin as an address.
pub fn admin_wallet() -> WalletAddress {
    WalletAddress([
        0x5b, 0x38, 0xda, 0x6a, 0x70, 0x1c, 0x56, 0x85, 0x45, 0xdc, 0xfc, 0xb0, 0x3f, 0xcb, 0x87,
        0x5f, 0x56, 0xbe, 0xdd, 0xc4,
    ])
}

/// Everything a flow test needs.
pub struct Platform {
    /// Signing agent the user controls.
    pub agent: Arc<MockSigningAgent>,
    /// Session manager over `agent`.
    pub wallet: Arc<WalletSessionManager>,
    /// Document store.
    pub store: Arc<InMemoryContentStore>,
    /// Ledger.
    pub registry: Arc<InMemoryRegistry>,
    /// Login paths.
    pub resolver: RoleResolver,
    /// Citizen onboarding.
    pub orchestrator: RegistrationOrchestrator,
}

impl Platform {
    /// Platform whose user holds `account` and whose store answers with
    /// content-derived CIDs.
    pub fn new(account: WalletAddress) -> Self {
        Self::with_store(account, InMemoryContentStore::new())
    }

    /// Platform with a specific store.
    pub fn with_store(account: WalletAddress, store: InMemoryContentStore) -> Self {
        let agent = Arc::new(MockSigningAgent::with_account(account));
        let wallet = Arc::new(WalletSessionManager::with_agent(agent.clone()));
        let store = Arc::new(store);
        let registry = Arc::new(InMemoryRegistry::new());

        let resolver = RoleResolver::new(RoleResolutionConfig::with_admin(ADMIN), registry.clone());
        let orchestrator = RegistrationOrchestrator::new(
            wallet.clone(),
            ContentUploader::new(store.clone()),
            registry.clone(),
        );

        Self {
            agent,
            wallet,
            store,
            registry,
            resolver,
            orchestrator,
        }
    }

    /// A session for `account` without going through the manager.
    pub fn session_for(&self, account: WalletAddress) -> Session {
        Session::new(account, self.agent.clone())
    }
}

/// Active station mapped to `wallet`.
pub fn station(wallet: WalletAddress, code: &str, active: bool) -> Station {
    Station {
        id: 1,
        name: "Cyber Crime PS".to_string(),
        wallet,
        active,
        place: "Bengaluru".to_string(),
        code: code.to_string(),
        registered_at: 1_717_000_000,
    }
}

/// The reference registration: Asha Rao, Aadhaar 1234-5678-9012.
pub fn asha_form() -> RegistrationForm {
    RegistrationForm {
        full_name: "Asha Rao".to_string(),
        alias_name: String::new(),
        phone: Some("9876543210".to_string()),
        id_type: "Aadhaar".to_string(),
        id_number: "1234-5678-9012".to_string(),
        document: Some(Document::new("aadhaar-front.png", vec![0x89, b'P', b'N', b'G'])),
        city: "Bengaluru".to_string(),
        state: "Karnataka".to_string(),
        pincode: "560001".to_string(),
        consent: true,
    }
}
