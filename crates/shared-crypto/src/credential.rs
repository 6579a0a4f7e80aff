//! # Credential Hasher
//!
//! A citizen's identity document is referenced on-chain only through
//! `keccak256(id_type + ":" + id_number)`. The raw number never leaves this
//! function.

use shared_types::Fingerprint;

use crate::errors::CryptoError;
use crate::hashing::keccak256;

/// Canonical preimage `id_type:id_number`.
pub fn credential_preimage(id_type: &str, id_number: &str) -> String {
    format!("{id_type}:{id_number}")
}

/// Derive the fingerprint of an identity document.
///
/// Inputs are hashed exactly as given, surrounding whitespace included. Fails
/// only when either input is empty.
pub fn fingerprint(id_type: &str, id_number: &str) -> Result<Fingerprint, CryptoError> {
    if id_type.is_empty() {
        return Err(CryptoError::InvalidInput("ID type is required.".to_string()));
    }
    if id_number.is_empty() {
        return Err(CryptoError::InvalidInput("ID number is required.".to_string()));
    }
    let preimage = credential_preimage(id_type, id_number);
    Ok(Fingerprint(keccak256(preimage.as_bytes())))
}
