//! Repository implementation for the Categorical State Index.

use diesel::prelude::*;
use std::collections::HashMap;
use std::sync::Arc;

use mycokey_core::characters::CharacterKind;
use mycokey_core::states::{CategoricalStateRepositoryTrait, CharacterStateEntry, TraitValueRef};
use mycokey_core::Result;

use super::model::StateRow;
use crate::db::{get_connection, DbPool};
use crate::errors::StorageError;
use crate::schema::{characters, taxon_categorical_states, trait_values};

pub struct CategoricalStateRepository {
    pool: Arc<DbPool>,
}

impl CategoricalStateRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

impl CategoricalStateRepositoryTrait for CategoricalStateRepository {
    fn get_categorical_states(
        &self,
        taxon_ids: &[String],
    ) -> Result<HashMap<String, Vec<CharacterStateEntry>>> {
        if taxon_ids.is_empty() {
            return Ok(HashMap::new());
        }
        let mut conn = get_connection(&self.pool)?;
        let rows = taxon_categorical_states::table
            .inner_join(characters::table)
            .inner_join(trait_values::table)
            .filter(taxon_categorical_states::taxon_id.eq_any(taxon_ids))
            .filter(characters::kind.eq(CharacterKind::Categorical.as_str()))
            .select((
                taxon_categorical_states::taxon_id,
                taxon_categorical_states::character_id,
                characters::group_id,
                trait_values::id,
                trait_values::label,
                trait_values::hex_code,
            ))
            .order((
                taxon_categorical_states::taxon_id.asc(),
                taxon_categorical_states::character_id.asc(),
                trait_values::id.asc(),
            ))
            .load::<StateRow>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(fold_rows(rows))
    }
}

/// Folds ordered join rows into per-taxon entries. Rows arrive sorted by
/// (taxon, character), so each character's values land in one entry; trait
/// lists are deduplicated by trait value id.
fn fold_rows(rows: Vec<StateRow>) -> HashMap<String, Vec<CharacterStateEntry>> {
    let mut index: HashMap<String, Vec<CharacterStateEntry>> = HashMap::new();
    for row in rows {
        let entries = index.entry(row.taxon_id).or_default();
        let start_new_entry = entries
            .last()
            .map_or(true, |last| last.character_id != row.character_id);
        if start_new_entry {
            entries.push(CharacterStateEntry {
                character_id: row.character_id,
                group_id: row.group_id,
                trait_values: Vec::new(),
            });
        }
        if let Some(entry) = entries.last_mut() {
            if !entry
                .trait_values
                .iter()
                .any(|value| value.id == row.trait_value_id)
            {
                entry.trait_values.push(TraitValueRef {
                    id: row.trait_value_id,
                    label: row.trait_value_label,
                    hex_code: row.hex_code,
                });
            }
        }
    }
    index
}
