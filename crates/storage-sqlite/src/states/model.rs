//! Database models for taxon categorical states.

use diesel::prelude::*;

/// One row of the state join (states x characters x trait values), before
/// folding into per-taxon index entries.
#[derive(Queryable, PartialEq, Debug, Clone)]
pub struct StateRow {
    pub taxon_id: String,
    pub character_id: String,
    pub group_id: String,
    pub trait_value_id: String,
    pub trait_value_label: String,
    pub hex_code: Option<String>,
}
