use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// One persisted match transaction. Rows are insert-only.
#[derive(Debug, Clone, FromRow)]
pub struct MatchRecordRow {
    /// Assigned by the store on insert.
    pub id: Uuid,
    /// Always `None` until requests carry an authenticated user.
    pub user_id: Option<Uuid>,
    pub cv_text: String,
    pub job_description: String,
    pub match_score: f64,
    pub result: Value,
    pub created_at: DateTime<Utc>,
}
