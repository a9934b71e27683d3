//! Comparison module - side-by-side diff of two taxa's trait assignments.

mod comparison_model;
mod comparison_service;
mod comparison_traits;

pub use comparison_model::{
    ComparisonCharacter, ComparisonDetail, ComparisonGroup, ComparisonTrait,
};
pub use comparison_service::ComparisonService;
pub use comparison_traits::ComparisonServiceTrait;
