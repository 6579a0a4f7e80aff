//! # Inbound Ports

use async_trait::async_trait;
use ct_01_wallet_session::Session;
use shared_types::{CivicError, Role};

/// Role Resolution API - inbound port.
///
/// Each path takes the session explicitly; holding a [`Session`] is what
/// "an active session" means.
#[async_trait]
pub trait RoleResolutionApi: Send + Sync {
    /// Admin path.
    async fn resolve_admin(&self, session: &Session) -> Result<Role, CivicError>;

    /// Station path. `claimed_station_id` is the code the officer typed.
    async fn resolve_station(
        &self,
        session: &Session,
        claimed_station_id: &str,
    ) -> Result<Role, CivicError>;

    /// Citizen path.
    async fn resolve_citizen(&self, session: &Session) -> Result<Role, CivicError>;
}
