//! Database models for taxa.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use log::warn;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use mycokey_core::taxa::{TaxonMedia, TaxonStatus, TaxonSummary};

/// Database model for taxa
#[derive(Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::taxa)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct TaxonDB {
    pub id: String,
    pub accepted_name: String,
    pub preferred_common_name: Option<String>,
    pub rank: String,
    pub status: String,
    pub media: Option<String>, // JSON payload
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<TaxonDB> for TaxonSummary {
    fn from(db: TaxonDB) -> Self {
        let media = db.media.as_deref().and_then(|raw| {
            serde_json::from_str::<TaxonMedia>(raw)
                .map_err(|e| warn!("Ignoring malformed media JSON for taxon {}: {}", db.id, e))
                .ok()
        });
        let status = TaxonStatus::from_str(&db.status).unwrap_or_else(|_| {
            warn!(
                "Unknown status '{}' for taxon {}; treating as draft",
                db.status, db.id
            );
            TaxonStatus::Draft
        });
        TaxonSummary {
            id: db.id,
            accepted_name: db.accepted_name,
            preferred_common_name: db.preferred_common_name,
            rank: db.rank,
            status,
            media,
        }
    }
}
