//! Lookalike ranking over canonicalized categorical trait overlap.

use log::{debug, warn};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;

use crate::errors::ValidationError;
use crate::states::{
    collect_trait_value_ids, effective_pairs, CategoricalStateRepositoryTrait, EqualityMode,
};
use crate::taxa::{TaxonRepositoryTrait, TaxonSummary};
use crate::trait_sets::{CanonicalMap, TraitValueRepositoryTrait};
use crate::{Error, Result};

use super::{LookalikeCandidate, LookalikeServiceTrait};

/// Per-candidate overlap counts before metadata attachment.
struct OverlapScore {
    taxon_id: String,
    shared_count: usize,
    other_count: usize,
    jaccard: f64,
    pct_of_target_matched: f64,
}

pub struct LookalikeService {
    taxon_repository: Arc<dyn TaxonRepositoryTrait>,
    state_repository: Arc<dyn CategoricalStateRepositoryTrait>,
    trait_value_repository: Arc<dyn TraitValueRepositoryTrait>,
}

impl LookalikeService {
    pub fn new(
        taxon_repository: Arc<dyn TaxonRepositoryTrait>,
        state_repository: Arc<dyn CategoricalStateRepositoryTrait>,
        trait_value_repository: Arc<dyn TraitValueRepositoryTrait>,
    ) -> Self {
        Self {
            taxon_repository,
            state_repository,
            trait_value_repository,
        }
    }
}

impl LookalikeServiceTrait for LookalikeService {
    fn rank_lookalikes(
        &self,
        target_taxon_id: &str,
        limit: usize,
        min_shared: usize,
    ) -> Result<Vec<LookalikeCandidate>> {
        if limit == 0 {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "limit must be at least 1".to_string(),
            )));
        }

        // The target must exist; unlike candidates it may hold any status.
        self.taxon_repository
            .get_taxon_summary(target_taxon_id)?
            .ok_or_else(|| Error::NotFound(format!("Taxon '{}' not found", target_taxon_id)))?;

        let target_states = self
            .state_repository
            .get_categorical_states(&[target_taxon_id.to_string()])?
            .remove(target_taxon_id)
            .unwrap_or_default();
        if target_states.is_empty() {
            debug!(
                "Taxon {} has no categorical states; returning no lookalikes",
                target_taxon_id
            );
            return Ok(Vec::new());
        }

        let candidate_ids: Vec<String> = self
            .taxon_repository
            .get_active_taxon_ids()?
            .into_iter()
            .filter(|id| id != target_taxon_id)
            .collect();
        let candidate_states = self
            .state_repository
            .get_categorical_states(&candidate_ids)?;

        // One canonical map covers the target and every candidate, built
        // from the trait value rows as they stand right now.
        let trait_value_ids = collect_trait_value_ids(
            target_states
                .iter()
                .chain(candidate_states.values().flatten()),
        );
        let trait_values = self
            .trait_value_repository
            .get_trait_values_by_ids(&trait_value_ids)?;
        let canonical = CanonicalMap::from_values(&trait_values);

        let target_pairs = effective_pairs(&target_states, EqualityMode::Canonical, &canonical);
        let target_count = target_pairs.len();

        let mut scores: Vec<OverlapScore> = Vec::new();
        for (taxon_id, entries) in &candidate_states {
            let other_pairs = effective_pairs(entries, EqualityMode::Canonical, &canonical);
            let shared_count = other_pairs.intersection(&target_pairs).count();
            if shared_count < min_shared {
                continue;
            }
            let other_count = other_pairs.len();
            let union_count = target_count + other_count - shared_count;
            if union_count == 0 {
                // Both sets empty; nothing to score.
                continue;
            }
            scores.push(OverlapScore {
                taxon_id: taxon_id.clone(),
                shared_count,
                other_count,
                jaccard: shared_count as f64 / union_count as f64,
                pct_of_target_matched: shared_count as f64 / target_count as f64,
            });
        }

        // Candidate state iteration order is not stable, so the full
        // tie-break chain is what makes identical inputs reproduce
        // identical output.
        scores.sort_by(|a, b| {
            b.jaccard
                .partial_cmp(&a.jaccard)
                .unwrap_or(Ordering::Equal)
                .then_with(|| b.shared_count.cmp(&a.shared_count))
                .then_with(|| a.taxon_id.cmp(&b.taxon_id))
        });
        scores.truncate(limit);

        let ranked_ids: Vec<String> = scores.iter().map(|score| score.taxon_id.clone()).collect();
        let mut summaries: HashMap<String, TaxonSummary> = self
            .taxon_repository
            .get_taxon_summaries(&ranked_ids)?
            .into_iter()
            .map(|summary| (summary.id.clone(), summary))
            .collect();

        let mut candidates = Vec::with_capacity(scores.len());
        for score in scores {
            let Some(summary) = summaries.remove(&score.taxon_id) else {
                warn!(
                    "Dropping lookalike {}: summary disappeared during ranking",
                    score.taxon_id
                );
                continue;
            };
            candidates.push(LookalikeCandidate {
                id: summary.id,
                accepted_name: summary.accepted_name,
                preferred_common_name: summary.preferred_common_name,
                rank: summary.rank,
                media: summary.media,
                shared_count: score.shared_count,
                jaccard: score.jaccard,
                pct_of_target_matched: score.pct_of_target_matched,
                target_count,
                other_count: score.other_count,
            });
        }

        debug!(
            "Ranked {} lookalikes for taxon {} (target pairs: {}, min shared: {})",
            candidates.len(),
            target_taxon_id,
            target_count,
            min_shared
        );
        Ok(candidates)
    }
}
