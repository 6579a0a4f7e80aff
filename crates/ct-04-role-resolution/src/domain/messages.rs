//! User-facing reasons for each denial.

/// Admin address absent from configuration.
pub const ADMIN_NOT_CONFIGURED: &str =
    "Admin wallet address is not configured. Set CT_ADMIN_ADDRESS in the environment.";

/// Session wallet differs from the configured admin.
pub const NOT_CONFIGURED_ADMIN: &str = "You are not the configured platform admin.";

/// Configured admin without on-chain membership.
pub const ADMIN_NOT_ON_CHAIN: &str = "This wallet is not recognized as platform admin on-chain.";

/// Station login without a claimed ID.
pub const STATION_ID_REQUIRED: &str = "Please enter your Station Unique ID.";

/// No active station for the wallet, or the lookup failed.
pub const STATION_NOT_MAPPED: &str =
    "This wallet is not mapped to any active police station. Contact platform admin.";

/// Claimed ID differs from the on-chain code.
pub const STATION_ID_MISMATCH: &str =
    "Station Unique ID does not match the ID assigned by the platform admin.";

/// No citizen record for the wallet.
pub const CITIZEN_NOT_FOUND: &str = "No citizen account found. Please register first.";
