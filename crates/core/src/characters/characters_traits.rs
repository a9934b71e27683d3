//! Traits for character metadata access.

use crate::Result;

use super::CharacterMeta;

/// Read-side repository for character metadata.
pub trait CharacterRepositoryTrait: Send + Sync {
    /// Metadata (label, group id, group label) for the given character ids.
    ///
    /// Implementations return at most one row per requested id; callers
    /// treat missing rows as a data-integrity error.
    fn get_character_meta(&self, character_ids: &[String]) -> Result<Vec<CharacterMeta>>;
}
