pub mod health;
pub mod matches;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        .route("/meta", get(health::meta_handler))
        .route("/db/health", get(health::db_health_handler))
        .route("/match/preview", post(matches::handle_match_preview))
        .with_state(state)
}
