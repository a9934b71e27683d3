//! Repository implementation for taxon summaries.

use diesel::prelude::*;
use std::sync::Arc;

use mycokey_core::taxa::{TaxonRepositoryTrait, TaxonStatus, TaxonSummary};
use mycokey_core::Result;

use super::model::TaxonDB;
use crate::db::{get_connection, DbPool};
use crate::errors::StorageError;
use crate::schema::taxa;

pub struct TaxonRepository {
    pool: Arc<DbPool>,
}

impl TaxonRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

impl TaxonRepositoryTrait for TaxonRepository {
    fn get_taxon_summary(&self, taxon_id: &str) -> Result<Option<TaxonSummary>> {
        let mut conn = get_connection(&self.pool)?;
        let row = taxa::table
            .find(taxon_id)
            .first::<TaxonDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(row.map(TaxonSummary::from))
    }

    fn get_taxon_summaries(&self, taxon_ids: &[String]) -> Result<Vec<TaxonSummary>> {
        if taxon_ids.is_empty() {
            return Ok(Vec::new());
        }
        let mut conn = get_connection(&self.pool)?;
        let rows = taxa::table
            .filter(taxa::id.eq_any(taxon_ids))
            .order(taxa::id.asc())
            .load::<TaxonDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(TaxonSummary::from).collect())
    }

    fn get_active_taxon_ids(&self) -> Result<Vec<String>> {
        let mut conn = get_connection(&self.pool)?;
        let ids = taxa::table
            .filter(taxa::status.eq(TaxonStatus::Active.as_str()))
            .select(taxa::id)
            .order(taxa::id.asc())
            .load::<String>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(ids)
    }
}
