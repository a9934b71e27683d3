//! Traits for trait value access.

use crate::Result;

use super::TraitValue;

/// Read-side repository for trait value rows.
pub trait TraitValueRepositoryTrait: Send + Sync {
    /// Trait value rows for the given ids. Ids without a row are skipped.
    fn get_trait_values_by_ids(&self, trait_value_ids: &[String]) -> Result<Vec<TraitValue>>;
}
