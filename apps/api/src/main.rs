mod config;
mod db;
mod deploy;
mod errors;
mod extract;
mod matching;
mod models;
mod repositories;
mod routes;
mod state;

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, RuntimeMode};
use crate::db::{Database, DbSettings};
use crate::matching::analyzer::KeywordMatcher;
use crate::repositories::PgMatchStore;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging; no ANSI colours in Lambda log streams
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_ansi(config.mode == RuntimeMode::Server))
        .init();

    info!("Starting JobFitCV API v{}", env!("CARGO_PKG_VERSION"));

    // Storage: eager for the server, deferred to first use under Lambda cold starts
    let db = Arc::new(Database::new(DbSettings::from(&config)));
    match config.mode {
        RuntimeMode::Server => {
            db.init().await.context("Failed to initialize storage")?;
        }
        RuntimeMode::Lambda => info!("Deferring storage initialization to first use"),
    }

    let state = AppState {
        matcher: Arc::new(KeywordMatcher),
        store: Arc::new(PgMatchStore::new(db)),
    };

    let app = deploy::with_middleware(build_router(state), &config)?;

    match config.mode {
        RuntimeMode::Server => deploy::serve_http(app, config.port).await,
        RuntimeMode::Lambda => deploy::serve_lambda(app).await,
    }
}
