//! Traits for taxon comparison.

use crate::Result;

use super::ComparisonDetail;

/// Service building a character-group-organized diff of two taxa.
pub trait ComparisonServiceTrait: Send + Sync {
    /// Partitions every character recorded on either taxon into shared and
    /// exclusive trait values, grouped by character group for display.
    fn compare_taxa(&self, taxon_id_a: &str, taxon_id_b: &str) -> Result<ComparisonDetail>;
}
