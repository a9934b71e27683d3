//! Trait value repository backed by SQLite.

mod model;
mod repository;

pub use model::TraitValueDB;
pub use repository::TraitValueRepository;
