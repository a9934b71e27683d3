//! Taxon summary repository backed by SQLite.

mod model;
mod repository;

pub use model::TaxonDB;
pub use repository::TaxonRepository;
