//! Domain models for taxa as seen by the engine.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{Error, ValidationError};

/// Publication status of a taxon.
///
/// Only active taxa are eligible lookalike candidates; a ranking target may
/// hold any status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TaxonStatus {
    Active,
    Draft,
    Deprecated,
}

impl TaxonStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaxonStatus::Active => "active",
            TaxonStatus::Draft => "draft",
            TaxonStatus::Deprecated => "deprecated",
        }
    }
}

impl fmt::Display for TaxonStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TaxonStatus {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "active" => Ok(TaxonStatus::Active),
            "draft" => Ok(TaxonStatus::Draft),
            "deprecated" => Ok(TaxonStatus::Deprecated),
            other => Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Unknown taxon status: {}",
                other
            )))),
        }
    }
}

/// Display media attached to a taxon. Stored as a JSON column in the
/// catalog; malformed payloads degrade to no media rather than failing a
/// read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxonMedia {
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub attribution: Option<String>,
}

/// Summary DTO carrying the display metadata attached to ranked candidates
/// and comparison sides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxonSummary {
    pub id: String,
    pub accepted_name: String,
    pub preferred_common_name: Option<String>,
    pub rank: String,
    pub status: TaxonStatus,
    pub media: Option<TaxonMedia>,
}
