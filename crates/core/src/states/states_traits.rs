//! Traits for categorical state access.

use std::collections::HashMap;

use crate::Result;

use super::CharacterStateEntry;

/// Read-side repository for the Categorical State Index.
pub trait CategoricalStateRepositoryTrait: Send + Sync {
    /// Per-taxon categorical state entries for the given taxon ids.
    ///
    /// Taxa without categorical states are absent from the map; an empty
    /// input yields an empty map. Entries within a taxon are unique by
    /// character id and trait value lists are deduplicated by trait value
    /// id.
    fn get_categorical_states(
        &self,
        taxon_ids: &[String],
    ) -> Result<HashMap<String, Vec<CharacterStateEntry>>>;
}
