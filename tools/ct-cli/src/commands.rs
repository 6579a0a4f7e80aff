//! Subcommand handlers.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Subcommand, ValueEnum};
use ct_02_content_store::Document;
use ct_04_role_resolution::LoginGrant;
use ct_05_citizen_registration::{CitizenRegistrationApi, RegistrationForm, RegistrationOutcome};
use shared_types::{CivicError, Role, RoleKind, ValidationError};

use crate::wiring::Services;

/// Login tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LoginRole {
    /// Platform administrator.
    Admin,
    /// Police station officer.
    Station,
    /// Registered citizen.
    Citizen,
}

impl From<LoginRole> for RoleKind {
    fn from(role: LoginRole) -> Self {
        match role {
            LoginRole::Admin => RoleKind::Admin,
            LoginRole::Station => RoleKind::Station,
            LoginRole::Citizen => RoleKind::Citizen,
        }
    }
}

/// Citizen registration fields.
#[derive(Debug, Args)]
pub struct RegisterArgs {
    /// Legal name
    #[arg(long)]
    pub full_name: String,
    /// Display name (defaults to the full name)
    #[arg(long, default_value = "")]
    pub alias: String,
    /// Contact number (not stored)
    #[arg(long)]
    pub phone: Option<String>,
    /// Identity document type: Aadhaar, PAN, Driving License, Passport,
    /// Voter ID or Others
    #[arg(long, default_value = "Aadhaar")]
    pub id_type: String,
    /// Identity document number (hashed locally, never sent)
    #[arg(long)]
    pub id_number: String,
    /// Path to the identity document scan (image or PDF)
    #[arg(long)]
    pub document: PathBuf,
    /// City
    #[arg(long, default_value = "")]
    pub city: String,
    /// State
    #[arg(long, default_value = "")]
    pub state: String,
    /// Postal code
    #[arg(long, default_value = "")]
    pub pincode: String,
    /// Accept the Terms and Privacy Policy
    #[arg(long)]
    pub agree_terms: bool,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Log in with the active wallet account
    Login {
        /// Which login path to use
        #[arg(value_enum)]
        role: LoginRole,
        /// Station Unique ID (station login only)
        #[arg(long)]
        station_id: Option<String>,
    },
    /// Register the active wallet account as a citizen
    Register(RegisterArgs),
    /// Print the credential fingerprint for an ID type and number
    Fingerprint {
        /// Identity document type
        #[arg(long)]
        id_type: String,
        /// Identity document number
        #[arg(long)]
        id_number: String,
    },
}

/// Run the login flow.
pub async fn login(
    services: &Services,
    role: LoginRole,
    station_id: Option<&str>,
) -> Result<LoginGrant, CivicError> {
    services
        .resolver
        .login(services.wallet.as_ref(), role.into(), station_id)
        .await
}

/// Run the registration flow.
///
/// Form fields are checked before the document is read, so a missing consent
/// or name is reported ahead of an unreadable path.
pub async fn register(services: &Services, args: RegisterArgs) -> Result<RegistrationOutcome> {
    let mut form = RegistrationForm {
        full_name: args.full_name,
        alias_name: args.alias,
        phone: args.phone,
        id_type: args.id_type,
        id_number: args.id_number,
        document: None,
        city: args.city,
        state: args.state,
        pincode: args.pincode,
        consent: args.agree_terms,
    };
    match form.validate() {
        Ok(_) | Err(ValidationError::MissingDocument) => {}
        Err(e) => return Err(CivicError::from(e).into()),
    }

    let document = Document::from_path(&args.document)
        .await
        .map_err(CivicError::from)?;
    form.document = Some(document);

    Ok(services.orchestrator.register_citizen(None, form).await?)
}

/// Human-readable grant summary.
pub fn describe_grant(grant: &LoginGrant) -> String {
    let mut out = format!("{}\nWallet: {}", grant.message(), grant.wallet);
    if let Role::Station { station_id, code, name } = &grant.role {
        out.push_str(&format!("\nStation: {name} ({code}, #{station_id})"));
    }
    out
}

/// Human-readable registration summary.
pub fn describe_registration(outcome: &RegistrationOutcome) -> String {
    format!(
        "{}\nWallet: {}\nDocument CID: {}\nTransaction: {} (block {})",
        outcome.message(),
        outcome.wallet,
        outcome.document_cid,
        outcome.receipt.tx_hash_hex(),
        outcome.receipt.block_number
    )
}
