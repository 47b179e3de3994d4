use std::sync::Arc;

use crate::matching::analyzer::MatchingService;
use crate::repositories::MatchStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable matching backend. Default: KeywordMatcher.
    pub matcher: Arc<dyn MatchingService>,
    /// Record store. Default: PgMatchStore over the process-wide `Database`.
    pub store: Arc<dyn MatchStore>,
}
