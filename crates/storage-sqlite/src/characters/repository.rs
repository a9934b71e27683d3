//! Repository implementation for character metadata.

use diesel::prelude::*;
use std::sync::Arc;

use mycokey_core::characters::{CharacterMeta, CharacterRepositoryTrait};
use mycokey_core::Result;

use super::model::CharacterMetaDB;
use crate::db::{get_connection, DbPool};
use crate::errors::StorageError;
use crate::schema::{character_groups, characters};

pub struct CharacterRepository {
    pool: Arc<DbPool>,
}

impl CharacterRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

impl CharacterRepositoryTrait for CharacterRepository {
    fn get_character_meta(&self, character_ids: &[String]) -> Result<Vec<CharacterMeta>> {
        if character_ids.is_empty() {
            return Ok(Vec::new());
        }
        let mut conn = get_connection(&self.pool)?;
        let rows = characters::table
            .inner_join(character_groups::table)
            .filter(characters::id.eq_any(character_ids))
            .select((
                characters::id,
                characters::label,
                characters::group_id,
                character_groups::label,
            ))
            .order(characters::id.asc())
            .load::<CharacterMetaDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(CharacterMeta::from).collect())
    }
}
