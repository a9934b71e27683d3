//! States module - the Categorical State Index and set-level views over it.

mod partition;
mod state_index;
mod states_model;
mod states_traits;

pub use partition::{partition_by_equality, EqualityMode, TraitPartition};
pub use state_index::{collect_trait_value_ids, effective_pairs};
pub use states_model::{CharacterStateEntry, TraitValueRef};
pub use states_traits::CategoricalStateRepositoryTrait;
