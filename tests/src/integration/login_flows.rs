//! # Login Flows
//!
//! Wallet session (01) → role resolution (04) → registry (03).

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use ct_01_wallet_session::{MockSigningAgent, WalletSessionApi, WalletSessionManager};
    use ct_04_role_resolution::{RoleResolutionApi, RoleResolutionConfig, RoleResolver};
    use shared_types::{CivicError, Role, RoleKind, WalletAddress};

    use crate::fixtures::{admin_wallet, station, Platform, ADMIN};

    const OFFICER: WalletAddress = WalletAddress([0x0f; 20]);

    // =============================================================================
    // ADMIN MATRIX
    // =============================================================================

    #[tokio::test]
    async fn test_admin_matrix() {
        // (configured match, on-chain) -> granted
        let cases = [(true, false, false), (false, true, false), (true, true, true)];

        for (matches_config, on_chain, granted) in cases {
            let account = if matches_config {
                admin_wallet()
            } else {
                WalletAddress([0xee; 20])
            };
            let platform = Platform::new(account);
            if on_chain {
                platform.registry.add_admin(account);
            }

            let result = platform
                .resolver
                .login(platform.wallet.as_ref(), RoleKind::Admin, None)
                .await;

            assert_eq!(
                result.is_ok(),
                granted,
                "match={matches_config} on_chain={on_chain}: {result:?}"
            );
            if let Err(err) = result {
                assert!(matches!(err, CivicError::NotAuthorized(_)));
            }
            if !matches_config {
                assert_eq!(platform.registry.read_count(), 0);
            }
        }
    }

    #[tokio::test]
    async fn test_admin_needs_configuration() {
        let platform = Platform::new(admin_wallet());
        platform.registry.add_admin(admin_wallet());
        let resolver = RoleResolver::new(RoleResolutionConfig::default(), platform.registry.clone());

        let err = resolver
            .login(platform.wallet.as_ref(), RoleKind::Admin, None)
            .await
            .unwrap_err();
        assert!(matches!(err, CivicError::Configuration(ref m) if m.contains("not configured")));
    }

    // =============================================================================
    // STATION
    // =============================================================================

    #[tokio::test]
    async fn test_station_code_matching() {
        let platform = Platform::new(OFFICER);
        platform.registry.add_station(station(OFFICER, "CC-PS-01", true));

        let grant = platform
            .resolver
            .login(platform.wallet.as_ref(), RoleKind::Station, Some("cc-ps-01"))
            .await
            .unwrap();
        assert_eq!(grant.message(), "Welcome back, Station Officer.");
        assert!(matches!(grant.role, Role::Station { ref code, .. } if code == "CC-PS-01"));

        let err = platform
            .resolver
            .login(platform.wallet.as_ref(), RoleKind::Station, Some("cc-ps-02"))
            .await
            .unwrap_err();
        assert!(matches!(err, CivicError::NotAuthorized(ref m) if m.contains("does not match")));
    }

    #[tokio::test]
    async fn test_inactive_station_always_denied() {
        let platform = Platform::new(OFFICER);
        platform.registry.add_station(station(OFFICER, "CC-PS-01", false));

        for claim in ["CC-PS-01", "cc-ps-01", "other"] {
            let err = platform
                .resolver
                .login(platform.wallet.as_ref(), RoleKind::Station, Some(claim))
                .await
                .unwrap_err();
            assert!(matches!(err, CivicError::NotAuthorized(ref m) if m.contains("not mapped")));
        }
    }

    #[tokio::test]
    async fn test_unmapped_wallet_station_login() {
        let platform = Platform::new(OFFICER);
        let err = platform
            .resolver
            .login(platform.wallet.as_ref(), RoleKind::Station, Some("CC-PS-01"))
            .await
            .unwrap_err();
        assert!(matches!(err, CivicError::NotAuthorized(_)));
    }

    // =============================================================================
    // CITIZEN
    // =============================================================================

    #[tokio::test]
    async fn test_unregistered_citizen_is_not_found() {
        let platform = Platform::new(WalletAddress([0xc1; 20]));
        let err = platform
            .resolver
            .login(platform.wallet.as_ref(), RoleKind::Citizen, None)
            .await
            .unwrap_err();
        assert!(err.is_denial());
        assert!(matches!(err, CivicError::NotFound(ref m) if m.contains("register first")));
    }

    // =============================================================================
    // SESSION BEHAVIOUR
    // =============================================================================

    #[tokio::test]
    async fn test_account_switch_changes_outcome() {
        let platform = Platform::new(WalletAddress([0x01; 20]));
        platform.registry.add_admin(admin_wallet());

        assert!(platform
            .resolver
            .login(platform.wallet.as_ref(), RoleKind::Admin, None)
            .await
            .is_err());

        platform.agent.set_accounts(vec![admin_wallet()]);
        let grant = platform
            .resolver
            .login(platform.wallet.as_ref(), RoleKind::Admin, None)
            .await
            .unwrap();
        assert_eq!(grant.wallet, admin_wallet());
        assert_eq!(
            platform.wallet.current_session().unwrap().address(),
            admin_wallet()
        );
    }

    #[tokio::test]
    async fn test_rejected_connection_is_cancellation() {
        let platform = Platform::new(admin_wallet());
        let wallet = WalletSessionManager::with_agent(Arc::new(MockSigningAgent::rejecting_accounts()));

        let err = platform
            .resolver
            .login(&wallet, RoleKind::Citizen, None)
            .await
            .unwrap_err();
        assert!(matches!(err, CivicError::UserCancelled(_)));
        assert_eq!(platform.registry.read_count(), 0);
    }

    #[tokio::test]
    async fn test_same_inputs_same_outcome() {
        let platform = Platform::new(admin_wallet());
        platform.registry.add_admin(admin_wallet());
        let session = platform.session_for(admin_wallet());

        let first = platform.resolver.resolve_admin(&session).await;
        let second = platform.resolver.resolve_admin(&session).await;
        assert_eq!(first, second);
        assert_eq!(first.unwrap(), Role::Admin);
        // Two attempts, two registry round trips: nothing cached.
        assert_eq!(platform.registry.read_count(), 2);
    }

    #[test]
    fn test_configured_admin_constant_parses() {
        assert_eq!(ADMIN.parse::<WalletAddress>().unwrap(), admin_wallet());
    }
}
