//! Shared partition-by-equality building block.
//!
//! The ranker compares trait identities canonically while the comparison
//! view compares them by raw id. Both go through [`EqualityMode`] so the
//! divergence lives in one place instead of two copies of the set logic.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::trait_sets::CanonicalMap;

use super::TraitValueRef;

/// Which notion of trait equality a computation uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EqualityMode {
    /// Collapse aliases to their canonical identity before comparing.
    Canonical,
    /// Compare by raw trait value id.
    Raw,
}

impl EqualityMode {
    /// The comparison identity of `trait_value_id` under this mode.
    pub fn identity<'a>(&self, canonical: &'a CanonicalMap, trait_value_id: &'a str) -> &'a str {
        match self {
            EqualityMode::Canonical => canonical.resolve(trait_value_id),
            EqualityMode::Raw => trait_value_id,
        }
    }
}

/// One character's trait values split into shared and exclusive sets.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TraitPartition {
    pub shared: Vec<TraitValueRef>,
    pub only_a: Vec<TraitValueRef>,
    pub only_b: Vec<TraitValueRef>,
}

/// Partitions two sides' trait values by identity under `mode`.
///
/// Shared entries keep side A's representation. Input order is preserved;
/// duplicate identities within one side collapse to the first occurrence.
pub fn partition_by_equality(
    side_a: &[TraitValueRef],
    side_b: &[TraitValueRef],
    mode: EqualityMode,
    canonical: &CanonicalMap,
) -> TraitPartition {
    let identities_a: HashSet<&str> = side_a
        .iter()
        .map(|value| mode.identity(canonical, &value.id))
        .collect();
    let identities_b: HashSet<&str> = side_b
        .iter()
        .map(|value| mode.identity(canonical, &value.id))
        .collect();

    let mut partition = TraitPartition::default();

    let mut seen_a = HashSet::new();
    for value in side_a {
        let identity = mode.identity(canonical, &value.id);
        if !seen_a.insert(identity) {
            continue;
        }
        if identities_b.contains(identity) {
            partition.shared.push(value.clone());
        } else {
            partition.only_a.push(value.clone());
        }
    }

    let mut seen_b = HashSet::new();
    for value in side_b {
        let identity = mode.identity(canonical, &value.id);
        if !seen_b.insert(identity) {
            continue;
        }
        if !identities_a.contains(identity) {
            partition.only_b.push(value.clone());
        }
    }

    partition
}
