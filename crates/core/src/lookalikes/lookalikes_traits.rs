//! Traits for lookalike ranking.

use crate::Result;

use super::LookalikeCandidate;

/// Service ranking other taxa by categorical trait overlap with a target.
pub trait LookalikeServiceTrait: Send + Sync {
    /// Ranks every other active taxon against `target_taxon_id` by shared
    /// canonical `(character, trait)` pairs.
    ///
    /// Candidates sharing fewer than `min_shared` pairs are discarded; the
    /// survivors are ordered by Jaccard similarity (descending), then
    /// shared count (descending), then taxon id (ascending), and truncated
    /// to `limit`. A `limit` of zero is an invalid argument, so an empty
    /// result always means "no matches".
    fn rank_lookalikes(
        &self,
        target_taxon_id: &str,
        limit: usize,
        min_shared: usize,
    ) -> Result<Vec<LookalikeCandidate>>;
}
