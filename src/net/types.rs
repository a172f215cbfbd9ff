//! Shared DTOs for the registry API boundary.
//!
//! DESIGN
//! ======
//! These types mirror the payload shapes the REST layer defines so serde
//! round-trips stay lossless whether records come from the mock source or a
//! future live backend. Descriptive parcel fields are optional because the
//! search endpoint returns a slimmer projection than the owner dashboard.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A land parcel as represented on the wire.
///
/// Records are flat and independent: `title_number` is human-assigned and
/// not guaranteed globally unique, and nothing here references another
/// record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LandRecord {
    /// Registry-assigned record identifier.
    pub id: u32,
    /// Human-assigned title number (e.g. `"TL001234"`).
    pub title_number: String,
    /// Free-text location description.
    pub location: String,
    /// Parcel area in square meters, carried as the fixture supplies it.
    pub area: String,
    /// Registered owner's display name.
    pub owner_name: String,
    /// Whether a registering authority has confirmed the record.
    pub verified: bool,
    /// Registration date (`YYYY-MM-DD`).
    pub created_at: String,
    /// Last-updated date (`YYYY-MM-DD`).
    pub last_updated: String,
    /// Estimated value as a currency string, possibly with thousands
    /// separators and a trailing currency code.
    pub estimated_value: String,
    /// Land-use classification (e.g. `"Residential"`), if known.
    #[serde(default)]
    pub land_use: Option<String>,
    /// Soil classification, if known.
    #[serde(default)]
    pub soil_type: Option<String>,
    /// Zoning code, if known.
    #[serde(default)]
    pub zoning: Option<String>,
    /// Geographic coordinates as free text, if known.
    #[serde(default)]
    pub coordinates: Option<String>,
    /// Boundary description, if known.
    #[serde(default)]
    pub boundaries: Option<String>,
    /// Authority that registered the parcel, if known.
    #[serde(default)]
    pub registered_by: Option<String>,
    /// Reference to the supporting document, if any.
    #[serde(default)]
    pub document_url: Option<String>,
}

/// Payload for registering a new parcel (`POST /api/lands`).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NewLandRecord {
    pub title_number: String,
    pub location: String,
    /// Parcel area in square meters.
    pub area: String,
    /// File name of the uploaded supporting document, if one was chosen.
    #[serde(default)]
    pub document_name: Option<String>,
}

/// A land-related transaction as shown in the history table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// Referenced title number. Carried as a plain string; the registry does
    /// not validate that it resolves to a record.
    pub land_title: String,
    #[serde(rename = "from")]
    pub from_party: String,
    #[serde(rename = "to")]
    pub to_party: String,
    /// Transaction date (`YYYY-MM-DD`).
    pub date: String,
    pub status: TransactionStatus,
    /// Amount as a currency string.
    pub amount: String,
}

/// Kind of registry transaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionKind {
    Registration,
    Transfer,
    Verification,
}

impl TransactionKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Registration => "Registration",
            Self::Transfer => "Transfer",
            Self::Verification => "Verification",
        }
    }
}

/// Lifecycle status of a transaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionStatus {
    Completed,
    Pending,
    Rejected,
}

impl TransactionStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::Pending => "Pending",
            Self::Rejected => "Rejected",
        }
    }
}

/// Payload for recording a new transaction (`POST /api/transactions`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewTransaction {
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub land_title: String,
    #[serde(rename = "from")]
    pub from_party: String,
    #[serde(rename = "to")]
    pub to_party: String,
    pub amount: String,
}

/// An authenticated registry user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// Account type selected at registration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Individual land owner or buyer.
    #[default]
    Citizen,
    /// Land authority staff.
    Official,
    /// Legal professional for land transactions.
    Notary,
}

impl Role {
    pub fn label(self) -> &'static str {
        match self {
            Self::Citizen => "Citizen",
            Self::Official => "Government Official",
            Self::Notary => "Notary Public",
        }
    }

    /// Wire form used by the registration payload and the role radio group.
    pub fn as_key(self) -> &'static str {
        match self {
            Self::Citizen => "citizen",
            Self::Official => "official",
            Self::Notary => "notary",
        }
    }

    /// Parse the wire form back; unknown keys fall back to `Citizen`.
    pub fn from_key(key: &str) -> Self {
        match key {
            "official" => Self::Official,
            "notary" => Self::Notary,
            _ => Self::Citizen,
        }
    }
}

/// Payload for creating an account (`POST /api/auth/register`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewAccount {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Successful login response: the signed-in user plus an access token.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthSession {
    pub user: User,
    pub token: String,
}
