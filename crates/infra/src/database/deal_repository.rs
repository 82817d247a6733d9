//! Deal repository implementation using SQLite
//!
//! Rows keep insertion order through the autoincrement `seq` column. Amounts
//! are stored as decimal text so no precision is lost, timestamps as RFC 3339
//! text, and the marketing-service set as a JSON array.

use std::collections::BTreeSet;
use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dealdesk_core::DealRepository;
use dealdesk_domain::{
    Deal, DealAmount, DealDeskError, DealId, DealStage, MarketingService, Result as DomainResult,
};
use rusqlite::types::Type;
use rusqlite::{params, OptionalExtension, Row};
use tokio::task;

use super::manager::{map_sql_error, DbManager};
use crate::errors::InfraError;

const DEAL_COLUMNS: &str = "id, client_name, contact_email, contact_phone, iban, cr_number,
     payment_notes, deal_amount, stage, deal_description, marketing_services, created_date";

/// SQLite-backed implementation of `DealRepository`
pub struct SqliteDealRepository {
    db: Arc<DbManager>,
}

impl SqliteDealRepository {
    /// Create a new repository instance
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DealRepository for SqliteDealRepository {
    async fn list(&self) -> DomainResult<Vec<Deal>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<Vec<Deal>> {
            let conn = db.get_connection()?;
            let mut stmt = conn
                .prepare(&format!("SELECT {DEAL_COLUMNS} FROM deals ORDER BY seq"))
                .map_err(map_sql_error)?;
            let rows = stmt.query_map(params![], map_deal_row).map_err(map_sql_error)?;
            rows.collect::<rusqlite::Result<Vec<_>>>().map_err(map_sql_error)
        })
        .await
        .map_err(map_join_error)?
    }

    async fn get(&self, id: &DealId) -> DomainResult<Option<Deal>> {
        let db = Arc::clone(&self.db);
        let id = id.to_string();

        task::spawn_blocking(move || -> DomainResult<Option<Deal>> {
            let conn = db.get_connection()?;
            conn.query_row(
                &format!("SELECT {DEAL_COLUMNS} FROM deals WHERE id = ?1"),
                params![id],
                map_deal_row,
            )
            .optional()
            .map_err(map_sql_error)
        })
        .await
        .map_err(map_join_error)?
    }

    async fn insert(&self, deal: Deal) -> DomainResult<()> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<()> {
            let services = encode_services(&deal.marketing_services)?;
            let conn = db.get_connection()?;
            conn.execute(
                "INSERT INTO deals (id, client_name, contact_email, contact_phone, iban, cr_number,
                                    payment_notes, deal_amount, stage, deal_description,
                                    marketing_services, created_date)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
                params![
                    deal.id.to_string(),
                    deal.client_name,
                    deal.contact_email,
                    deal.contact_phone,
                    deal.iban,
                    deal.cr_number,
                    deal.payment_notes,
                    deal.deal_amount.to_string(),
                    deal.stage.to_string(),
                    deal.deal_description,
                    services,
                    deal.created_date.to_rfc3339(),
                ],
            )
            .map_err(map_sql_error)?;
            Ok(())
        })
        .await
        .map_err(map_join_error)?
    }

    async fn set_stage(&self, id: &DealId, stage: DealStage) -> DomainResult<bool> {
        let db = Arc::clone(&self.db);
        let id = id.to_string();

        task::spawn_blocking(move || -> DomainResult<bool> {
            let conn = db.get_connection()?;
            let changed = conn
                .execute("UPDATE deals SET stage = ?1 WHERE id = ?2", params![stage.to_string(), id])
                .map_err(map_sql_error)?;
            Ok(changed > 0)
        })
        .await
        .map_err(map_join_error)?
    }

    async fn list_by_client(&self, client_name: &str) -> DomainResult<Vec<Deal>> {
        let db = Arc::clone(&self.db);
        let client_name = client_name.to_string();

        task::spawn_blocking(move || -> DomainResult<Vec<Deal>> {
            let conn = db.get_connection()?;
            let mut stmt = conn
                .prepare(&format!(
                    "SELECT {DEAL_COLUMNS} FROM deals WHERE client_name = ?1 ORDER BY seq"
                ))
                .map_err(map_sql_error)?;
            let rows = stmt.query_map(params![client_name], map_deal_row).map_err(map_sql_error)?;
            rows.collect::<rusqlite::Result<Vec<_>>>().map_err(map_sql_error)
        })
        .await
        .map_err(map_join_error)?
    }

    async fn health_check(&self) -> DomainResult<()> {
        let db = Arc::clone(&self.db);
        task::spawn_blocking(move || db.health_check()).await.map_err(map_join_error)?
    }
}

// =============================================================================
// Row Mapping
// =============================================================================

fn map_deal_row(row: &Row<'_>) -> rusqlite::Result<Deal> {
    Ok(Deal {
        id: parse_column(row, 0)?,
        client_name: row.get(1)?,
        contact_email: row.get(2)?,
        contact_phone: row.get(3)?,
        iban: row.get(4)?,
        cr_number: row.get(5)?,
        payment_notes: row.get(6)?,
        deal_amount: parse_column::<DealAmount>(row, 7)?,
        stage: parse_column::<DealStage>(row, 8)?,
        deal_description: row.get(9)?,
        marketing_services: decode_services(row, 10)?,
        created_date: parse_timestamp(row, 11)?,
    })
}

fn parse_column<T>(row: &Row<'_>, idx: usize) -> rusqlite::Result<T>
where
    T: FromStr,
    T::Err: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    let raw: String = row.get(idx)?;
    raw.parse::<T>()
        .map_err(|err| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, err.into()))
}

fn parse_timestamp(row: &Row<'_>, idx: usize) -> rusqlite::Result<DateTime<Utc>> {
    let raw: String = row.get(idx)?;
    DateTime::parse_from_rfc3339(&raw)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|err| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(err)))
}

fn decode_services(row: &Row<'_>, idx: usize) -> rusqlite::Result<BTreeSet<MarketingService>> {
    let raw: String = row.get(idx)?;
    serde_json::from_str(&raw)
        .map_err(|err| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(err)))
}

fn encode_services(services: &BTreeSet<MarketingService>) -> DomainResult<String> {
    serde_json::to_string(services)
        .map_err(|e| DealDeskError::Internal(format!("failed to encode marketing services: {e}")))
}

fn map_join_error(err: task::JoinError) -> DealDeskError {
    DealDeskError::from(InfraError::from(err))
}
