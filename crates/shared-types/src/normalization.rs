//! # Identifier Normalization
//!
//! Wallet addresses and station codes are user-visible strings that arrive in
//! mixed case (checksummed addresses, hand-typed station IDs). Every equality
//! check on them goes through this module.

/// Canonical form of an address or station code: trimmed and lower-cased.
pub fn normalize_identifier(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Compare two identifiers under [`normalize_identifier`].
///
/// An identifier that normalizes to the empty string never matches anything,
/// including another empty identifier.
pub fn identifiers_match(left: &str, right: &str) -> bool {
    let left = normalize_identifier(left);
    !left.is_empty() && left == normalize_identifier(right)
}
