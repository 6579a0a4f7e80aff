//! # Role Resolver
//!
//! Application service implementing the three login paths.

use std::sync::Arc;

use async_trait::async_trait;
use ct_01_wallet_session::{Session, WalletSessionApi};
use ct_03_ledger_registry::{RegistryError, RegistryReader};
use ct_telemetry::record_login;
use shared_types::{identifiers_match, CivicError, Role, RoleKind};
use tracing::{info, warn};

use crate::config::RoleResolutionConfig;
use crate::domain::{messages, LoginGrant};
use crate::ports::RoleResolutionApi;

/// Role Resolver.
pub struct RoleResolver {
    config: RoleResolutionConfig,
    registry: Arc<dyn RegistryReader>,
}

impl RoleResolver {
    /// Create a resolver over a registry.
    pub fn new(config: RoleResolutionConfig, registry: Arc<dyn RegistryReader>) -> Self {
        Self { config, registry }
    }

    /// Run the path selected by `kind`. `claim` is only read by the station
    /// path.
    pub async fn resolve(
        &self,
        kind: RoleKind,
        session: &Session,
        claim: Option<&str>,
    ) -> Result<Role, CivicError> {
        match kind {
            RoleKind::Admin => self.resolve_admin(session).await,
            RoleKind::Station => self.resolve_station(session, claim.unwrap_or("")).await,
            RoleKind::Citizen => self.resolve_citizen(session).await,
        }
    }

    /// Connect (or reconnect) to the signing agent and run the selected path.
    ///
    /// For the station path the claim is checked before the wallet is asked
    /// for anything.
    pub async fn login(
        &self,
        wallet: &dyn WalletSessionApi,
        kind: RoleKind,
        claim: Option<&str>,
    ) -> Result<LoginGrant, CivicError> {
        if kind == RoleKind::Station && claim.map_or(true, |c| c.trim().is_empty()) {
            return Err(self.deny(
                kind,
                None,
                CivicError::InvalidInput(messages::STATION_ID_REQUIRED.to_string()),
            ));
        }

        let session = wallet
            .connect()
            .await
            .map_err(|e| self.deny(kind, None, e.into()))?;

        let role = self.resolve(kind, &session, claim).await?;
        Ok(LoginGrant {
            wallet: session.address(),
            role,
        })
    }

    async fn check_admin(&self, session: &Session) -> Result<Role, CivicError> {
        let configured = self.config.admin_address()?;
        let wallet = session.address();

        if !identifiers_match(&wallet.to_hex(), configured) {
            return Err(CivicError::NotAuthorized(
                messages::NOT_CONFIGURED_ADMIN.to_string(),
            ));
        }

        if !self.registry.is_platform_admin(wallet).await? {
            return Err(CivicError::NotAuthorized(
                messages::ADMIN_NOT_ON_CHAIN.to_string(),
            ));
        }

        Ok(Role::Admin)
    }

    async fn check_station(&self, session: &Session, claim: &str) -> Result<Role, CivicError> {
        let claim = claim.trim();
        if claim.is_empty() {
            return Err(CivicError::InvalidInput(
                messages::STATION_ID_REQUIRED.to_string(),
            ));
        }

        let wallet = session.address();
        let station = match self.registry.get_station_by_wallet(wallet).await {
            Ok(Some(station)) if station.active => station,
            Ok(_) => {
                return Err(CivicError::NotAuthorized(
                    messages::STATION_NOT_MAPPED.to_string(),
                ))
            }
            Err(RegistryError::Configuration(reason)) => {
                return Err(CivicError::Configuration(reason))
            }
            Err(e) => {
                warn!(wallet = %wallet, "[ct-04] Station lookup failed, denying: {}", e);
                return Err(CivicError::NotAuthorized(
                    messages::STATION_NOT_MAPPED.to_string(),
                ));
            }
        };

        if !identifiers_match(&station.code, claim) {
            return Err(CivicError::NotAuthorized(
                messages::STATION_ID_MISMATCH.to_string(),
            ));
        }

        Ok(Role::Station {
            station_id: station.id,
            code: station.code,
            name: station.name,
        })
    }

    async fn check_citizen(&self, session: &Session) -> Result<Role, CivicError> {
        if !self.registry.is_citizen(session.address()).await? {
            return Err(CivicError::NotFound(messages::CITIZEN_NOT_FOUND.to_string()));
        }
        Ok(Role::Citizen)
    }

    fn finish(
        &self,
        kind: RoleKind,
        session: &Session,
        result: Result<Role, CivicError>,
    ) -> Result<Role, CivicError> {
        match result {
            Ok(role) => {
                info!(role = %kind, wallet = %session.address(), "[ct-04] Login granted");
                record_login(kind.as_str(), "granted");
                Ok(role)
            }
            Err(e) => Err(self.deny(kind, Some(session), e)),
        }
    }

    fn deny(&self, kind: RoleKind, session: Option<&Session>, err: CivicError) -> CivicError {
        let wallet = session.map(|s| s.address().to_hex()).unwrap_or_default();
        info!(role = %kind, wallet = %wallet, "[ct-04] Login denied: {}", err);
        record_login(kind.as_str(), err.category());
        err
    }
}

#[async_trait]
impl RoleResolutionApi for RoleResolver {
    async fn resolve_admin(&self, session: &Session) -> Result<Role, CivicError> {
        let result = self.check_admin(session).await;
        self.finish(RoleKind::Admin, session, result)
    }

    async fn resolve_station(
        &self,
        session: &Session,
        claimed_station_id: &str,
    ) -> Result<Role, CivicError> {
        let result = self.check_station(session, claimed_station_id).await;
        self.finish(RoleKind::Station, session, result)
    }

    async fn resolve_citizen(&self, session: &Session) -> Result<Role, CivicError> {
        let result = self.check_citizen(session).await;
        self.finish(RoleKind::Citizen, session, result)
    }
}
