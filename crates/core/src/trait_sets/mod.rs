//! Trait sets module - trait vocabularies and alias canonicalization.
//!
//! Trait sets themselves (creation, editing, deletion) are owned by the
//! external catalog; the engine reads trait value rows and collapses
//! aliases to canonical identities per computation.

mod canonical_map;
mod trait_sets_model;
mod trait_sets_traits;

pub use canonical_map::CanonicalMap;
pub use trait_sets_model::TraitValue;
pub use trait_sets_traits::TraitValueRepositoryTrait;
