//! Taxa module - taxon summaries and status eligibility.

mod taxa_model;
mod taxa_traits;

pub use taxa_model::{TaxonMedia, TaxonStatus, TaxonSummary};
pub use taxa_traits::TaxonRepositoryTrait;
