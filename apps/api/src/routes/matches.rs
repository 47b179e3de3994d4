//! Axum route handlers for the Match API.

use axum::{extract::State, Json};
use tracing::info;

use crate::errors::AppError;
use crate::extract::ValidatedJson;
use crate::models::preview::{MatchPreviewRequest, MatchPreviewResponse};
use crate::state::AppState;

/// POST /match/preview
///
/// Scores the CV against the job description, records the transaction, and
/// returns the score. Every call writes a new record. Matching and storage
/// failures are not caught here and surface as 5xx.
pub async fn handle_match_preview(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<MatchPreviewRequest>,
) -> Result<Json<MatchPreviewResponse>, AppError> {
    let outcome = state
        .matcher
        .analyze_match(&payload.cv_text, &payload.job_description)
        .map_err(|e| AppError::Matching(format!("{e:#}")))?;

    // No authenticated user yet
    let record = state.store.save(&payload, &outcome, None).await?;
    info!(
        "Recorded match {} (match_score {}, overall_score {})",
        record.id, outcome.match_score, outcome.overall_score
    );

    Ok(Json(MatchPreviewResponse::from(outcome)))
}
