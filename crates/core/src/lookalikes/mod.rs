//! Lookalikes module - similarity ranking over categorical trait overlap.

mod lookalikes_model;
mod lookalikes_service;
mod lookalikes_traits;

pub use lookalikes_model::LookalikeCandidate;
pub use lookalikes_service::LookalikeService;
pub use lookalikes_traits::LookalikeServiceTrait;
