//! Output models for lookalike ranking.

use serde::{Deserialize, Serialize};

use crate::taxa::TaxonMedia;

/// A ranked lookalike candidate with its similarity metadata.
///
/// `jaccard` and `pct_of_target_matched` are fractions in `[0, 1]`;
/// `target_count` and `other_count` are the full canonical-pair counts of
/// the two taxa, not restricted to the intersection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookalikeCandidate {
    pub id: String,
    pub accepted_name: String,
    pub preferred_common_name: Option<String>,
    pub rank: String,
    pub media: Option<TaxonMedia>,
    pub shared_count: usize,
    pub jaccard: f64,
    pub pct_of_target_matched: f64,
    pub target_count: usize,
    pub other_count: usize,
}
