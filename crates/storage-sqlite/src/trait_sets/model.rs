//! Database models for trait values.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use mycokey_core::trait_sets::TraitValue;

/// Database model for trait values
#[derive(Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::trait_values)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct TraitValueDB {
    pub id: String,
    pub set_id: String,
    pub key: String,
    pub label: String,
    pub is_canonical: bool,
    pub canonical_value_id: Option<String>,
    pub hex_code: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<TraitValueDB> for TraitValue {
    fn from(db: TraitValueDB) -> Self {
        TraitValue {
            id: db.id,
            set_id: db.set_id,
            key: db.key,
            label: db.label,
            is_canonical: db.is_canonical,
            canonical_value_id: db.canonical_value_id,
            hex_code: db.hex_code,
        }
    }
}
