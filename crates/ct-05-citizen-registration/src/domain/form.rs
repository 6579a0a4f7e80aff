//! # Registration Form

use std::fmt;

use ct_02_content_store::Document;
use shared_types::{CitizenMetadata, ContentId, ValidationError};

/// Citizen registration input.
#[derive(Clone, Default)]
pub struct RegistrationForm {
    /// Legal name. Required.
    pub full_name: String,
    /// Display name. Falls back to the full name when blank.
    pub alias_name: String,
    /// Contact number. Collected by the form but never stored or sent.
    pub phone: Option<String>,
    /// Identity document type, e.g. `Aadhaar`. Required.
    pub id_type: String,
    /// Identity document number. Required; only its fingerprint leaves the
    /// process.
    pub id_number: String,
    /// Scan of the identity document. Required.
    pub document: Option<Document>,
    /// City.
    pub city: String,
    /// State.
    pub state: String,
    /// Postal code.
    pub pincode: String,
    /// Terms and privacy policy accepted.
    pub consent: bool,
}

impl RegistrationForm {
    /// Check local preconditions in order: consent, then required fields.
    ///
    /// Returns the document to upload.
    pub fn validate(&self) -> Result<&Document, ValidationError> {
        if !self.consent {
            return Err(ValidationError::ConsentRequired);
        }
        if self.full_name.trim().is_empty() {
            return Err(ValidationError::MissingFullName);
        }
        if self.id_type.trim().is_empty() {
            return Err(ValidationError::MissingIdType);
        }
        if self.id_number.trim().is_empty() {
            return Err(ValidationError::MissingIdNumber);
        }
        self.document
            .as_ref()
            .filter(|doc| !doc.is_empty())
            .ok_or(ValidationError::MissingDocument)
    }

    /// Name written to the ledger.
    pub fn display_name(&self) -> &str {
        match self.alias_name.trim() {
            "" => self.full_name.trim(),
            alias => alias,
        }
    }

    /// Metadata blob contents for an uploaded document.
    pub fn metadata(&self, document_cid: &ContentId) -> CitizenMetadata {
        CitizenMetadata {
            city: self.city.trim().to_string(),
            state: self.state.trim().to_string(),
            pincode: self.pincode.trim().to_string(),
            document_cid: document_cid.to_string(),
        }
    }
}

impl fmt::Debug for RegistrationForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationForm")
            .field("full_name", &self.full_name)
            .field("alias_name", &self.alias_name)
            .field("phone", &self.phone.as_ref().map(|_| "<redacted>"))
            .field("id_type", &self.id_type)
            .field("id_number", &"<redacted>")
            .field("document", &self.document)
            .field("city", &self.city)
            .field("state", &self.state)
            .field("pincode", &self.pincode)
            .field("consent", &self.consent)
            .finish()
    }
}
