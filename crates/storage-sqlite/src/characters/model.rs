//! Database models for character metadata.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use mycokey_core::characters::CharacterMeta;

/// Joined character + group row backing `CharacterMeta`.
#[derive(Queryable, PartialEq, Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CharacterMetaDB {
    pub id: String,
    pub label: String,
    pub group_id: String,
    pub group_label: String,
}

impl From<CharacterMetaDB> for CharacterMeta {
    fn from(db: CharacterMetaDB) -> Self {
        CharacterMeta {
            id: db.id,
            label: db.label,
            group_id: db.group_id,
            group_label: db.group_label,
        }
    }
}
