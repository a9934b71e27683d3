//! Domain models for the Categorical State Index.

use serde::{Deserialize, Serialize};

/// A single trait value as recorded on a taxon, with raw identity.
///
/// Canonicalization is applied by consumers: the ranker collapses aliases
/// for equivalence while the comparison view keeps raw identity for
/// display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraitValueRef {
    pub id: String,
    pub label: String,
    pub hex_code: Option<String>,
}

/// All trait values a taxon holds for one categorical character.
///
/// Within one taxon's index, entries are unique by character id and the
/// trait value list is deduplicated by trait value id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterStateEntry {
    pub character_id: String,
    pub group_id: String,
    pub trait_values: Vec<TraitValueRef>,
}
