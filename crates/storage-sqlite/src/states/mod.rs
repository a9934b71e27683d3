//! Categorical state index repository backed by SQLite.

mod model;
mod repository;

pub use model::StateRow;
pub use repository::CategoricalStateRepository;
