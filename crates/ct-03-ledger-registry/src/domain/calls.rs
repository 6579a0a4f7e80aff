//! # Registry Calls

use shared_types::Fingerprint;

/// Arguments of the citizen registration write.
///
/// Carries only the fingerprint of the identity number; the number itself
/// never reaches this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterCitizenCall {
    /// Display name.
    pub alias_name: String,
    /// Identity document type tag.
    pub id_type: String,
    /// `keccak256(id_type ":" id_number)`.
    pub id_fingerprint: Fingerprint,
    /// Metadata JSON blob.
    pub metadata: String,
}
