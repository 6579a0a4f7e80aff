//! # Registration Flows
//!
//! Registration orchestrator (05) → content store (02) → credential hasher
//! → registry (03), then citizen login through role resolution (04).

#[cfg(test)]
mod tests {
    use ct_02_content_store::{InMemoryContentStore, StorageError};
    use ct_05_citizen_registration::{CitizenRegistrationApi, RegistrationForm};
    use proptest::prelude::*;
    use shared_crypto::{fingerprint, keccak256};
    use shared_types::{CivicError, Role, RoleKind, ValidationError, WalletAddress};

    use crate::fixtures::{asha_form, Platform};

    const CITIZEN: WalletAddress = WalletAddress([0xa5; 20]);

    #[tokio::test]
    async fn test_end_to_end_registration() {
        let platform =
            Platform::with_store(CITIZEN, InMemoryContentStore::with_fixed_cid("bafy...xyz"));

        let outcome = platform
            .orchestrator
            .register_citizen(None, asha_form())
            .await
            .unwrap();

        assert_eq!(outcome.wallet, CITIZEN);
        assert!(outcome.receipt.success);
        assert_eq!(outcome.receipt.from, CITIZEN);
        assert_eq!(outcome.document_cid.as_str(), "bafy...xyz");

        let record = platform.registry.citizen(CITIZEN).unwrap();
        assert_eq!(record.id_fingerprint.0, keccak256(b"Aadhaar:1234-5678-9012"));
        assert_eq!(record.id_type, "Aadhaar");
        assert_eq!(record.alias_name, "Asha Rao");

        let metadata = record.parsed_metadata().unwrap();
        assert_eq!(metadata.document_cid, "bafy...xyz");
        assert_eq!(metadata.city, "Bengaluru");
        assert_eq!(metadata.pincode, "560001");
    }

    #[tokio::test]
    async fn test_registered_citizen_can_log_in() {
        let platform = Platform::new(CITIZEN);
        platform
            .orchestrator
            .register_citizen(None, asha_form())
            .await
            .unwrap();

        let grant = platform
            .resolver
            .login(platform.wallet.as_ref(), RoleKind::Citizen, None)
            .await
            .unwrap();
        assert_eq!(grant.role, Role::Citizen);
        assert_eq!(grant.message(), "Welcome back, Citizen.");
    }

    #[tokio::test]
    async fn test_identity_number_never_leaves_process() {
        let platform = Platform::new(CITIZEN);
        platform
            .orchestrator
            .register_citizen(None, asha_form())
            .await
            .unwrap();

        let record = platform.registry.citizen(CITIZEN).unwrap();
        assert!(!record.metadata.contains("1234-5678-9012"));
        assert!(!record.metadata.contains("9876543210"));

        for tx in platform.agent.sent_transactions() {
            let calldata = String::from_utf8_lossy(&tx.data);
            assert!(!calldata.contains("1234-5678-9012"));
            assert!(!calldata.contains("9876543210"));
        }
    }

    #[tokio::test]
    async fn test_consent_false_makes_no_calls() {
        let platform = Platform::new(CITIZEN);
        let err = platform
            .orchestrator
            .register_citizen(
                None,
                RegistrationForm {
                    consent: false,
                    ..asha_form()
                },
            )
            .await
            .unwrap_err();

        assert_eq!(err, CivicError::Validation(ValidationError::ConsentRequired));
        assert_eq!(platform.store.upload_count(), 0);
        assert_eq!(platform.registry.write_attempts(), 0);
        assert!(platform.agent.sent_transactions().is_empty());
    }

    #[tokio::test]
    async fn test_upload_failure_means_no_write() {
        for failure in [
            StorageError::AuthenticationFailed,
            StorageError::UploadFailed("HTTP 500".into()),
            StorageError::MissingCid,
        ] {
            let platform = Platform::with_store(CITIZEN, InMemoryContentStore::failing(failure));
            let err = platform
                .orchestrator
                .register_citizen(None, asha_form())
                .await
                .unwrap_err();

            assert_eq!(err.category(), "storage");
            assert_eq!(platform.registry.write_attempts(), 0);
            assert!(platform.registry.citizen(CITIZEN).is_none());
        }
    }

    #[tokio::test]
    async fn test_second_registration_rejected_by_ledger() {
        let platform = Platform::new(CITIZEN);
        platform
            .orchestrator
            .register_citizen(None, asha_form())
            .await
            .unwrap();

        let err = platform
            .orchestrator
            .register_citizen(None, asha_form())
            .await
            .unwrap_err();
        assert!(matches!(err, CivicError::Ledger(_)));
        // The second document was still pinned before the ledger refused.
        assert_eq!(platform.store.upload_count(), 2);
    }

    #[test]
    fn test_fingerprint_matches_registration_path() {
        let direct = fingerprint("Aadhaar", "1234-5678-9012").unwrap();
        assert_eq!(direct.0, keccak256(b"Aadhaar:1234-5678-9012"));
    }

    proptest! {
        #[test]
        fn prop_distinct_numbers_distinct_records(a in "[0-9]{12}", b in "[0-9]{12}") {
            prop_assume!(a != b);
            let fa = fingerprint("Aadhaar", &a).unwrap();
            let fb = fingerprint("Aadhaar", &b).unwrap();
            prop_assert_ne!(fa, fb);
        }
    }
}
