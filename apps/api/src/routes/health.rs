use axum::{extract::State, Json};
use serde_json::{json, Value};
use tracing::warn;

use crate::state::AppState;

pub const APP_NAME: &str = "JobFitCV";
pub const APP_DESCRIPTION: &str = "API for matching CVs to job descriptions.";

/// GET /
pub async fn root_handler() -> Json<Value> {
    Json(json!({ "message": "JobFitCV backend is running" }))
}

/// GET /health
/// Process liveness only; never touches storage.
pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// GET /meta
pub async fn meta_handler() -> Json<Value> {
    Json(json!({
        "app": APP_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "description": APP_DESCRIPTION
    }))
}

/// GET /db/health
/// Storage failures are reported in the body with a 200, never as an error status.
pub async fn db_health_handler(State(state): State<AppState>) -> Json<Value> {
    match state.store.count().await {
        Ok(records_count) => Json(json!({
            "status": "ok",
            "records_count": records_count
        })),
        Err(e) => {
            let detail = e.to_string();
            warn!("Database health check failed: {detail}");
            Json(json!({
                "status": "error",
                "detail": detail
            }))
        }
    }
}
