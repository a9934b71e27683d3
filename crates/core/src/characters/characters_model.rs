//! Domain models for morphological characters.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{Error, ValidationError};

/// The measurement kind of a character.
///
/// Only categorical characters participate in lookalike ranking and
/// comparison; numeric and range characters are filtered out at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CharacterKind {
    Categorical,
    Numeric,
    Range,
}

impl CharacterKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CharacterKind::Categorical => "categorical",
            CharacterKind::Numeric => "numeric",
            CharacterKind::Range => "range",
        }
    }
}

impl fmt::Display for CharacterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CharacterKind {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "categorical" => Ok(CharacterKind::Categorical),
            "numeric" => Ok(CharacterKind::Numeric),
            "range" => Ok(CharacterKind::Range),
            other => Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Unknown character kind: {}",
                other
            )))),
        }
    }
}

/// Character metadata joined with its group, as consumed by the comparison
/// builder. One row per character; the group label is denormalized for
/// display grouping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterMeta {
    pub id: String,
    pub label: String,
    pub group_id: String,
    pub group_label: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_round_trips_through_strings() {
        for kind in [
            CharacterKind::Categorical,
            CharacterKind::Numeric,
            CharacterKind::Range,
        ] {
            assert_eq!(CharacterKind::from_str(kind.as_str()).unwrap(), kind);
        }
    }

    #[test]
    fn unknown_kind_is_rejected() {
        assert!(CharacterKind::from_str("ordinal").is_err());
    }
}
