use sqlx::types::Json;
use sqlx::PgExecutor;
use tracing::debug;
use uuid::Uuid;

use crate::db::Session;
use crate::matching::analyzer::MatchOutcome;
use crate::models::match_record::MatchRecordRow;
use crate::models::preview::MatchPreviewRequest;

/// Inserts one match record inside `session`; the store assigns `id` and `created_at`.
/// The caller commits.
/// Storage errors are returned untranslated.
pub async fn save_match_record(
    session: &mut Session,
    payload: &MatchPreviewRequest,
    result: &MatchOutcome,
    user_id: Option<Uuid>,
) -> Result<MatchRecordRow, sqlx::Error> {
    let record = sqlx::query_as::<_, MatchRecordRow>(
        r#"
        INSERT INTO match_records
            (user_id, cv_text, job_description, match_score, result)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(&payload.cv_text)
    .bind(&payload.job_description)
    .bind(result.match_score)
    .bind(Json(result))
    .fetch_one(session.conn())
    .await?;

    debug!("Inserted match record {} (score {})", record.id, result.match_score);
    Ok(record)
}

/// Returns the total number of persisted match records.
pub async fn count_match_records<'e>(executor: impl PgExecutor<'e>) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM match_records")
        .fetch_one(executor)
        .await
}
