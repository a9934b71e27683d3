//! Traits for taxon summary access.

use crate::Result;

use super::TaxonSummary;

/// Read-side repository for taxon summaries and candidate eligibility.
pub trait TaxonRepositoryTrait: Send + Sync {
    /// Summary for a single taxon, if it exists.
    fn get_taxon_summary(&self, taxon_id: &str) -> Result<Option<TaxonSummary>>;

    /// Summaries for a batch of taxa. Ids without a row are skipped.
    fn get_taxon_summaries(&self, taxon_ids: &[String]) -> Result<Vec<TaxonSummary>>;

    /// Ids of all taxa with `active` status, the candidate pool for
    /// lookalike ranking.
    fn get_active_taxon_ids(&self) -> Result<Vec<String>>;
}
