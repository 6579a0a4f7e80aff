//! # Registration Orchestrator
//!
//! Runs the registration steps strictly in order and stops at the first
//! failure. There is no local duplicate check; the registry rejects a second
//! registration for the same wallet.

use std::sync::Arc;

use async_trait::async_trait;
use ct_01_wallet_session::{Session, WalletSessionApi};
use ct_02_content_store::ContentUploader;
use ct_03_ledger_registry::{RegisterCitizenCall, RegistryWriter};
use ct_telemetry::record_registration;
use shared_crypto::fingerprint;
use shared_types::CivicError;
use tracing::{debug, info, warn};

use crate::domain::{RegistrationForm, RegistrationOutcome};
use crate::ports::CitizenRegistrationApi;

/// Registration Orchestrator.
pub struct RegistrationOrchestrator {
    wallet: Arc<dyn WalletSessionApi>,
    uploader: ContentUploader,
    registry: Arc<dyn RegistryWriter>,
}

impl RegistrationOrchestrator {
    /// Wire the orchestrator.
    pub fn new(
        wallet: Arc<dyn WalletSessionApi>,
        uploader: ContentUploader,
        registry: Arc<dyn RegistryWriter>,
    ) -> Self {
        Self {
            wallet,
            uploader,
            registry,
        }
    }

    async fn run(
        &self,
        session: Option<&Session>,
        form: RegistrationForm,
    ) -> Result<RegistrationOutcome, CivicError> {
        let document = form.validate()?;

        let session = match session {
            Some(session) => session.clone(),
            None => self.wallet.connect().await?,
        };
        let wallet = session.address();
        debug!(wallet = %wallet, "[ct-05] Registering citizen");

        let document_cid = self.uploader.upload(document).await?;

        let id_fingerprint = fingerprint(&form.id_type, &form.id_number)?;
        let metadata = form
            .metadata(&document_cid)
            .to_json()
            .map_err(|e| CivicError::InvalidInput(format!("metadata: {e}")))?;

        let call = RegisterCitizenCall {
            alias_name: form.display_name().to_string(),
            id_type: form.id_type.clone(),
            id_fingerprint,
            metadata,
        };

        let receipt = self
            .registry
            .register_citizen(&session, call)
            .await
            .map_err(|e| {
                warn!(
                    wallet = %wallet,
                    cid = %document_cid,
                    "[ct-05] Ledger write failed after upload; document left pinned: {}",
                    e
                );
                CivicError::from(e)
            })?;

        info!(
            wallet = %wallet,
            cid = %document_cid,
            tx_hash = %receipt.tx_hash_hex(),
            block = receipt.block_number,
            "[ct-05] Citizen registered"
        );

        Ok(RegistrationOutcome {
            wallet,
            receipt,
            document_cid,
        })
    }
}

#[async_trait]
impl CitizenRegistrationApi for RegistrationOrchestrator {
    async fn register_citizen(
        &self,
        session: Option<&Session>,
        form: RegistrationForm,
    ) -> Result<RegistrationOutcome, CivicError> {
        let result = self.run(session, form).await;
        match &result {
            Ok(_) => record_registration("success"),
            Err(e) => {
                info!("[ct-05] Registration failed: {}", e);
                record_registration(e.category());
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ct_01_wallet_session::{MockSigningAgent, WalletSessionManager};
    use ct_02_content_store::{Document, InMemoryContentStore, StorageError};
    use ct_03_ledger_registry::InMemoryRegistry;
    use shared_crypto::keccak256;
    use shared_types::{ValidationError, WalletAddress};

    const CITIZEN: WalletAddress = WalletAddress([0x77; 20]);

    struct Harness {
        agent: Arc<MockSigningAgent>,
        store: Arc<InMemoryContentStore>,
        registry: Arc<InMemoryRegistry>,
        orchestrator: RegistrationOrchestrator,
    }

    fn harness(store: InMemoryContentStore) -> Harness {
        let agent = Arc::new(MockSigningAgent::with_account(CITIZEN));
        let store = Arc::new(store);
        let registry = Arc::new(InMemoryRegistry::new());
        let orchestrator = RegistrationOrchestrator::new(
            Arc::new(WalletSessionManager::with_agent(agent.clone())),
            ContentUploader::new(store.clone()),
            registry.clone(),
        );
        Harness {
            agent,
            store,
            registry,
            orchestrator,
        }
    }

    fn form() -> RegistrationForm {
        RegistrationForm {
            full_name: "Asha Rao".into(),
            id_type: "Aadhaar".into(),
            id_number: "1234-5678-9012".into(),
            document: Some(Document::new("aadhaar.jpg", vec![0xff, 0xd8, 0xff])),
            city: "Mysuru".into(),
            state: "Karnataka".into(),
            pincode: "570001".into(),
            consent: true,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_registration_happy_path() {
        let h = harness(InMemoryContentStore::with_fixed_cid("bafy...xyz"));

        let outcome = h.orchestrator.register_citizen(None, form()).await.unwrap();

        assert_eq!(outcome.wallet, CITIZEN);
        assert_eq!(outcome.document_cid.as_str(), "bafy...xyz");
        assert!(outcome.receipt.success);
        assert_eq!(outcome.message(), "Registration successful. You can now login as a citizen.");

        let citizen = h.registry.citizen(CITIZEN).unwrap();
        assert_eq!(citizen.alias_name, "Asha Rao");
        assert_eq!(citizen.id_fingerprint.0, keccak256(b"Aadhaar:1234-5678-9012"));
        assert_eq!(citizen.parsed_metadata().unwrap().document_cid, "bafy...xyz");
        assert_eq!(h.agent.sent_transactions().len(), 1);
    }

    #[tokio::test]
    async fn test_uses_supplied_session() {
        let h = harness(InMemoryContentStore::new());
        let other = WalletAddress([0x78; 20]);
        let session = Session::new(other, Arc::new(MockSigningAgent::with_account(other)));

        let outcome = h
            .orchestrator
            .register_citizen(Some(&session), form())
            .await
            .unwrap();
        assert_eq!(outcome.wallet, other);
        // The manager's agent was never asked to sign.
        assert!(h.agent.sent_transactions().is_empty());
    }

    #[tokio::test]
    async fn test_no_consent_touches_nothing() {
        let h = harness(InMemoryContentStore::new());
        let err = h
            .orchestrator
            .register_citizen(
                None,
                RegistrationForm {
                    consent: false,
                    ..form()
                },
            )
            .await
            .unwrap_err();

        assert_eq!(err, CivicError::Validation(ValidationError::ConsentRequired));
        assert_eq!(h.store.upload_count(), 0);
        assert_eq!(h.registry.write_attempts(), 0);
    }

    #[tokio::test]
    async fn test_upload_failure_skips_ledger() {
        let h = harness(InMemoryContentStore::failing(StorageError::AuthenticationFailed));
        let err = h.orchestrator.register_citizen(None, form()).await.unwrap_err();

        assert!(matches!(err, CivicError::Storage(ref m) if m.contains("authentication failed")));
        assert_eq!(h.store.upload_count(), 1);
        assert_eq!(h.registry.write_attempts(), 0);
    }

    #[tokio::test]
    async fn test_duplicate_is_ledger_error() {
        let h = harness(InMemoryContentStore::new());
        h.orchestrator.register_citizen(None, form()).await.unwrap();

        let err = h.orchestrator.register_citizen(None, form()).await.unwrap_err();
        assert!(matches!(err, CivicError::Ledger(ref m) if m.contains("already registered")));
        assert_eq!(h.registry.write_attempts(), 2);
    }

    #[tokio::test]
    async fn test_signature_rejected_is_ledger_error() {
        let store = Arc::new(InMemoryContentStore::new());
        let registry = Arc::new(InMemoryRegistry::new());
        let orchestrator = RegistrationOrchestrator::new(
            Arc::new(WalletSessionManager::with_agent(Arc::new(
                MockSigningAgent::rejecting_transactions(CITIZEN),
            ))),
            ContentUploader::new(store.clone()),
            registry.clone(),
        );

        let err = orchestrator.register_citizen(None, form()).await.unwrap_err();
        assert!(matches!(err, CivicError::Ledger(ref m) if m.contains("rejected")));
        assert_eq!(err.category(), "ledger");
        // Upload happened before the signature prompt; the record did not.
        assert_eq!(store.upload_count(), 1);
        assert!(registry.citizen(CITIZEN).is_none());
    }

    #[tokio::test]
    async fn test_id_fields_are_hashed_as_entered() {
        let h = harness(InMemoryContentStore::new());
        let padded = RegistrationForm {
            id_number: " 1234-5678-9012".into(),
            ..form()
        };
        h.orchestrator.register_citizen(None, padded).await.unwrap();

        let citizen = h.registry.citizen(CITIZEN).unwrap();
        assert_eq!(citizen.id_fingerprint.0, keccak256(b"Aadhaar: 1234-5678-9012"));
        assert_ne!(citizen.id_fingerprint.0, keccak256(b"Aadhaar:1234-5678-9012"));
    }

    #[tokio::test]
    async fn test_no_signing_agent() {
        let store = Arc::new(InMemoryContentStore::new());
        let orchestrator = RegistrationOrchestrator::new(
            Arc::new(WalletSessionManager::new(None)),
            ContentUploader::new(store.clone()),
            Arc::new(InMemoryRegistry::new()),
        );
        let err = orchestrator.register_citizen(None, form()).await.unwrap_err();
        assert!(matches!(err, CivicError::NoSigningAgent(_)));
        assert_eq!(store.upload_count(), 0);
    }
}
