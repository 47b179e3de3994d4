//! Persistence for match transactions.
//!
//! `AppState` carries an `Arc<dyn MatchStore>`; `PgMatchStore` is the production backend.

pub mod match_repo;

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::db::Database;
use crate::errors::AppError;
use crate::matching::analyzer::MatchOutcome;
use crate::models::match_record::MatchRecordRow;
use crate::models::preview::MatchPreviewRequest;

#[async_trait]
pub trait MatchStore: Send + Sync {
    /// Durably records one match. Each call creates a new row.
    async fn save(
        &self,
        payload: &MatchPreviewRequest,
        result: &MatchOutcome,
        user_id: Option<Uuid>,
    ) -> Result<MatchRecordRow, AppError>;

    /// Counts every persisted record.
    async fn count(&self) -> Result<i64, AppError>;
}

/// PostgreSQL-backed store. Storage is initialized on first use if bootstrap skipped it.
pub struct PgMatchStore {
    db: Arc<Database>,
}

impl PgMatchStore {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MatchStore for PgMatchStore {
    async fn save(
        &self,
        payload: &MatchPreviewRequest,
        result: &MatchOutcome,
        user_id: Option<Uuid>,
    ) -> Result<MatchRecordRow, AppError> {
        // An early return drops the session, which rolls back.
        let mut session = self.db.session().await?;
        let record = match_repo::save_match_record(&mut session, payload, result, user_id).await?;
        session.commit().await?;
        Ok(record)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let pool = self.db.pool().await?;
        Ok(match_repo::count_match_records(pool).await?)
    }
}
