//! Characters module - morphological character metadata.
//!
//! Characters and their groups are owned by the external catalog; the engine
//! consumes them as read-only metadata.

mod characters_model;
mod characters_traits;

pub use characters_model::{CharacterKind, CharacterMeta};
pub use characters_traits::CharacterRepositoryTrait;
