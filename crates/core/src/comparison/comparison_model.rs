//! Output models for side-by-side taxon comparison.

use serde::{Deserialize, Serialize};

use crate::taxa::TaxonSummary;

/// A trait value in the comparison view, annotated with whether both taxa
/// hold it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonTrait {
    pub id: String,
    pub label: String,
    pub hex_code: Option<String>,
    pub is_shared: bool,
}

/// One character's trait values partitioned into shared and per-side
/// exclusive sets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonCharacter {
    pub character_id: String,
    pub label: String,
    pub shared: Vec<ComparisonTrait>,
    pub only_a: Vec<ComparisonTrait>,
    pub only_b: Vec<ComparisonTrait>,
}

/// The characters of one morphological group, ordered for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonGroup {
    pub group_id: String,
    pub group_label: String,
    pub characters: Vec<ComparisonCharacter>,
}

/// Full side-by-side comparison between two taxa.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonDetail {
    pub taxon_a: TaxonSummary,
    pub taxon_b: TaxonSummary,
    pub groups: Vec<ComparisonGroup>,
}
