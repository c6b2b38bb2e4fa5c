//! Wire DTOs for the record API.
//!
//! DESIGN
//! ======
//! Record structs use the backend's field names verbatim so the same type
//! serializes submit payloads and deserializes populate-on-edit fetches.
//! Choice tables mirror the backend's enumerated column values.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The five record types editable from the record pages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Gang,
    Member,
    Incident,
    Case,
    Relationship,
}

impl EntityKind {
    pub const ALL: [EntityKind; 5] = [Self::Gang, Self::Member, Self::Incident, Self::Case, Self::Relationship];

    /// Path segment used in `/api/{entity}/...`.
    pub fn segment(self) -> &'static str {
        match self {
            Self::Gang => "gang",
            Self::Member => "member",
            Self::Incident => "incident",
            Self::Case => "case",
            Self::Relationship => "relationship",
        }
    }

    /// Human-readable label used in titles and notices.
    pub fn label(self) -> &'static str {
        match self {
            Self::Gang => "Gang",
            Self::Member => "Member",
            Self::Incident => "Incident",
            Self::Case => "Case",
            Self::Relationship => "Relationship",
        }
    }

    pub fn from_segment(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.segment() == raw)
    }
}

/// Response envelope returned by every mutating endpoint.
///
/// Success bodies carry `success` and usually `message`; create responses
/// add the new `id`. Failure bodies carry `error`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse {
    #[serde(default)]
    pub success: bool,
    pub id: Option<i64>,
    pub message: Option<String>,
    pub error: Option<String>,
}

/// One selectable option of an enumerated column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Choice {
    pub value: &'static str,
    pub label: &'static str,
}

const fn choice(value: &'static str, label: &'static str) -> Choice {
    Choice { value, label }
}

pub const THREAT_LEVELS: &[Choice] = &[
    choice("LOW", "Low"),
    choice("MEDIUM", "Medium"),
    choice("HIGH", "High"),
    choice("CRITICAL", "Critical"),
];

pub const MEMBER_STATUSES: &[Choice] = &[
    choice("ACTIVE", "Active"),
    choice("INACTIVE", "Inactive"),
    choice("WANTED", "Wanted"),
    choice("INCARCERATED", "Incarcerated"),
    choice("DECEASED", "Deceased"),
];

pub const INCIDENT_TYPES: &[Choice] = &[
    choice("ASSAULT", "Assault"),
    choice("ROBBERY", "Robbery"),
    choice("DRUG_TRAFFICKING", "Drug Trafficking"),
    choice("MURDER", "Murder"),
    choice("WEAPONS", "Weapons Offense"),
    choice("TERRITORY_DISPUTE", "Territory Dispute"),
    choice("OTHER", "Other"),
];

pub const INCIDENT_STATUSES: &[Choice] = &[
    choice("OPEN", "Open"),
    choice("INVESTIGATING", "Investigating"),
    choice("CLOSED", "Closed"),
];

pub const CASE_PRIORITIES: &[Choice] = &[
    choice("LOW", "Low"),
    choice("MEDIUM", "Medium"),
    choice("HIGH", "High"),
    choice("URGENT", "Urgent"),
];

pub const CASE_STATUSES: &[Choice] = &[
    choice("OPEN", "Open"),
    choice("ACTIVE", "Active Investigation"),
    choice("PENDING", "Pending"),
    choice("CLOSED", "Closed"),
];

pub const RELATIONSHIP_TYPES: &[Choice] = &[
    choice("ALLIED", "Allied"),
    choice("NEUTRAL", "Neutral"),
    choice("RIVAL", "Rival"),
    choice("WAR", "At War"),
];

/// Gang organization.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Gang {
    pub name: String,
    /// Short tag/abbreviation.
    pub tag: String,
    /// Hex color code (e.g. `#FF0000`).
    pub color: String,
    pub threat_level: String,
    pub member_count: i64,
    pub territory: String,
    pub description: String,
    pub is_active: bool,
}

/// Gang member profile.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Member {
    pub name: String,
    pub alias: String,
    /// Owning gang; `null` when the form value is not a number.
    pub gang_id: Option<i64>,
    pub rank: String,
    pub threat_level: String,
    pub status: String,
    pub criminal_record: String,
    pub notes: String,
}

/// Incident report.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Incident {
    pub title: String,
    pub incident_type: String,
    pub location: String,
    pub description: String,
    pub severity: String,
    pub status: String,
    pub evidence: String,
}

/// Investigation case file. The image travels separately as a multipart part.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaseFile {
    pub case_number: String,
    pub title: String,
    pub description: String,
    pub priority: String,
    pub status: String,
    pub notes: String,
}

/// Relationship between two gangs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Relationship {
    pub gang_1_id: Option<i64>,
    pub gang_2_id: Option<i64>,
    pub relationship_type: String,
    pub notes: String,
}
