//! Domain models for trait vocabularies.

use serde::{Deserialize, Serialize};

/// A value in a trait vocabulary.
///
/// Non-canonical values alias a canonical value in the same set. Alias
/// chains are exactly one level deep: an alias always points at a value
/// that is itself canonical.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraitValue {
    pub id: String,
    pub set_id: String,
    pub key: String,
    pub label: String,
    pub is_canonical: bool,
    pub canonical_value_id: Option<String>,
    pub hex_code: Option<String>,
}

impl TraitValue {
    /// The single identity this value collapses to: its canonical target if
    /// it is an alias, otherwise itself.
    pub fn canonical_identity(&self) -> &str {
        self.canonical_value_id.as_deref().unwrap_or(&self.id)
    }
}
