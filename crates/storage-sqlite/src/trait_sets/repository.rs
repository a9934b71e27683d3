//! Repository implementation for trait values.

use diesel::prelude::*;
use std::sync::Arc;

use mycokey_core::trait_sets::{TraitValue, TraitValueRepositoryTrait};
use mycokey_core::Result;

use super::model::TraitValueDB;
use crate::db::{get_connection, DbPool};
use crate::errors::StorageError;
use crate::schema::trait_values;

pub struct TraitValueRepository {
    pool: Arc<DbPool>,
}

impl TraitValueRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

impl TraitValueRepositoryTrait for TraitValueRepository {
    fn get_trait_values_by_ids(&self, trait_value_ids: &[String]) -> Result<Vec<TraitValue>> {
        if trait_value_ids.is_empty() {
            return Ok(Vec::new());
        }
        let mut conn = get_connection(&self.pool)?;
        let rows = trait_values::table
            .filter(trait_values::id.eq_any(trait_value_ids))
            .order(trait_values::id.asc())
            .load::<TraitValueDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(TraitValue::from).collect())
    }
}
