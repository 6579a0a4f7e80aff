//! # Core Domain Entities
//!
//! ## Clusters
//!
//! - **Identity**: `WalletAddress`, `Fingerprint`, `Role`
//! - **Registry records**: `Citizen`, `CitizenMetadata`, `Station`
//! - **Ledger**: `TxReceipt`
//! - **Content store**: `ContentId`

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::AddressParseError;
use crate::normalization::normalize_identifier;

// =============================================================================
// CLUSTER A: IDENTITY
// =============================================================================

/// A 32-byte hash (Keccak-256).
pub type Hash = [u8; 32];

/// Parse a `0x`-prefixed (or bare) 32-byte hex string.
pub fn hash_from_hex(raw: &str) -> Option<Hash> {
    let digits = raw.trim().trim_start_matches("0x");
    let mut out = [0u8; 32];
    hex::decode_to_slice(digits, &mut out).ok()?;
    Some(out)
}

/// Recognized identity document types. Any non-empty tag is accepted; this
/// list is what front ends offer by default.
pub const KNOWN_ID_TYPES: [&str; 6] = [
    "Aadhaar",
    "PAN",
    "Driving License",
    "Passport",
    "Voter ID",
    "Others",
];

/// A 20-byte externally owned account address.
///
/// Parsing goes through [`normalize_identifier`], so checksummed and
/// lower-case spellings of the same address are equal.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct WalletAddress(pub [u8; 20]);

impl WalletAddress {
    /// The all-zero address. Registries return it for unmapped slots.
    pub const ZERO: WalletAddress = WalletAddress([0u8; 20]);

    /// Wrap raw bytes.
    pub fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// Raw bytes.
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// True for the zero address.
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 20]
    }

    /// `0x`-prefixed lower-case hex.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl FromStr for WalletAddress {
    type Err = AddressParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize_identifier(s);
        if normalized.is_empty() {
            return Err(AddressParseError::Empty);
        }
        let digits = normalized
            .strip_prefix("0x")
            .ok_or_else(|| AddressParseError::MissingPrefix(s.trim().to_string()))?;
        if digits.len() != 40 {
            return Err(AddressParseError::InvalidHex(s.trim().to_string()));
        }
        let mut bytes = [0u8; 20];
        hex::decode_to_slice(digits, &mut bytes)
            .map_err(|_| AddressParseError::InvalidHex(s.trim().to_string()))?;
        Ok(Self(bytes))
    }
}

impl fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for WalletAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WalletAddress({})", self.to_hex())
    }
}

impl Serialize for WalletAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for WalletAddress {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// One-way digest of an identity document type and number.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint(pub Hash);

impl Fingerprint {
    /// Raw digest bytes.
    pub fn as_bytes(&self) -> &Hash {
        &self.0
    }

    /// `0x`-prefixed lower-case hex.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fingerprint({})", self.to_hex())
    }
}

impl Serialize for Fingerprint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Fingerprint {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        let digits = raw.trim_start_matches("0x");
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(digits, &mut bytes).map_err(serde::de::Error::custom)?;
        Ok(Self(bytes))
    }
}

/// Which login path the user selected. Chosen explicitly, never sniffed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleKind {
    /// Platform administrator.
    Admin,
    /// Police station officer.
    Station,
    /// Registered citizen.
    Citizen,
}

impl RoleKind {
    /// Stable lower-case label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Station => "station",
            Self::Citizen => "citizen",
        }
    }
}

impl fmt::Display for RoleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A role granted for one login attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum Role {
    /// Configured and on-chain confirmed platform admin.
    Admin,
    /// Officer of an active station whose code matched the claim.
    Station {
        /// Registry-assigned numeric id.
        station_id: u64,
        /// Verified station code, as stored on-chain.
        code: String,
        /// Station display name.
        name: String,
    },
    /// Registered citizen.
    Citizen,
}

impl Role {
    /// Which path produced this grant.
    pub fn kind(&self) -> RoleKind {
        match self {
            Self::Admin => RoleKind::Admin,
            Self::Station { .. } => RoleKind::Station,
            Self::Citizen => RoleKind::Citizen,
        }
    }

    /// Greeting shown after a successful login.
    pub fn welcome_message(&self) -> &'static str {
        match self {
            Self::Admin => "Welcome back, Platform Admin.",
            Self::Station { .. } => "Welcome back, Station Officer.",
            Self::Citizen => "Welcome back, Citizen.",
        }
    }
}

// =============================================================================
// CLUSTER B: REGISTRY RECORDS
// =============================================================================

/// Off-chain location data plus the document reference, serialized as the
/// citizen's opaque metadata blob.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CitizenMetadata {
    /// City or town.
    pub city: String,
    /// State.
    pub state: String,
    /// Postal code.
    pub pincode: String,
    /// CID of the uploaded identity document.
    pub document_cid: String,
}

impl CitizenMetadata {
    /// Serialize to the JSON blob stored on-chain.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parse a metadata blob.
    pub fn from_json(blob: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(blob)
    }
}

/// A citizen record as held by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citizen {
    /// Owning wallet.
    pub wallet: WalletAddress,
    /// Display name (alias, or full name when no alias was given).
    pub alias_name: String,
    /// Identity document type tag.
    pub id_type: String,
    /// Fingerprint of `id_type:id_number`.
    pub id_fingerprint: Fingerprint,
    /// Opaque metadata blob (JSON of [`CitizenMetadata`]).
    pub metadata: String,
    /// Ledger time of registration (unix seconds).
    pub registered_at: u64,
}

impl Citizen {
    /// Decode the metadata blob, if it is well formed.
    pub fn parsed_metadata(&self) -> Option<CitizenMetadata> {
        CitizenMetadata::from_json(&self.metadata).ok()
    }
}

/// A police station record as held by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Station {
    /// Registry-assigned numeric id.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Wallet the station logs in with.
    pub wallet: WalletAddress,
    /// Only active stations may log in.
    pub active: bool,
    /// Location.
    pub place: String,
    /// Externally assigned unique code, e.g. `CC-PS-01`.
    pub code: String,
    /// Ledger time of registration (unix seconds).
    pub registered_at: u64,
}

// =============================================================================
// CLUSTER C: LEDGER & CONTENT STORE
// =============================================================================

/// Confirmed outcome of a ledger write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxReceipt {
    /// Transaction hash.
    pub tx_hash: Hash,
    /// Block that included the transaction.
    pub block_number: u64,
    /// Sender.
    pub from: WalletAddress,
    /// Execution status reported by the ledger.
    pub success: bool,
}

impl TxReceipt {
    /// `0x`-prefixed transaction hash.
    pub fn tx_hash_hex(&self) -> String {
        format!("0x{}", hex::encode(self.tx_hash))
    }
}

/// Content identifier returned by the content-addressed store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentId(String);

impl ContentId {
    /// Wrap a CID string.
    pub fn new(cid: impl Into<String>) -> Self {
        Self(cid.into())
    }

    /// Borrow the CID string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
