use std::time::Duration;

use sqlx::postgres::{PgConnection, PgPoolOptions};
use sqlx::{PgPool, Postgres, Transaction};
use tokio::sync::OnceCell;
use tracing::{debug, info};

use crate::config::Config;

const CREATE_MATCH_RECORDS: &str = r#"
CREATE TABLE IF NOT EXISTS match_records (
    id              UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    user_id         UUID NULL,
    cv_text         TEXT NOT NULL,
    job_description TEXT NOT NULL,
    match_score     DOUBLE PRECISION NOT NULL,
    result          JSONB NOT NULL,
    created_at      TIMESTAMPTZ NOT NULL DEFAULT now()
)
"#;

const CREATE_MATCH_RECORDS_CREATED_AT_IDX: &str =
    "CREATE INDEX IF NOT EXISTS match_records_created_at_idx ON match_records (created_at)";

/// Connection settings for the storage engine.
#[derive(Debug, Clone)]
pub struct DbSettings {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl From<&Config> for DbSettings {
    fn from(config: &Config) -> Self {
        Self {
            url: config.database_url.clone(),
            max_connections: config.db_max_connections,
            acquire_timeout: Duration::from_secs(config.db_acquire_timeout_secs),
        }
    }
}

/// Process-wide handle to PostgreSQL.
///
/// The pool and schema are set up at most once. `init` may be called eagerly at
/// bootstrap, or skipped entirely and left to the first `pool`/`session` call.
/// A failed attempt is not cached, so the next caller retries.
pub struct Database {
    settings: DbSettings,
    pool: OnceCell<PgPool>,
}

impl Database {
    pub fn new(settings: DbSettings) -> Self {
        Self {
            settings,
            pool: OnceCell::new(),
        }
    }

    /// Idempotently connects the pool and ensures the schema exists.
    pub async fn init(&self) -> Result<&PgPool, sqlx::Error> {
        self.pool
            .get_or_try_init(|| create_pool(&self.settings))
            .await
    }

    /// Returns the pool, initializing storage on first use.
    pub async fn pool(&self) -> Result<&PgPool, sqlx::Error> {
        self.init().await
    }

    /// Opens a scoped session. See [`Session`].
    pub async fn session(&self) -> Result<Session, sqlx::Error> {
        let tx = self.pool().await?.begin().await?;
        Ok(Session { tx })
    }
}

/// A unit of work against the database.
///
/// Writes become visible only after [`Session::commit`]. Dropping the session on
/// any other path rolls the transaction back and returns the connection to the pool.
pub struct Session {
    tx: Transaction<'static, Postgres>,
}

impl Session {
    pub fn conn(&mut self) -> &mut PgConnection {
        &mut self.tx
    }

    pub async fn commit(self) -> Result<(), sqlx::Error> {
        self.tx.commit().await
    }
}

/// Creates a PostgreSQL connection pool and applies the schema.
async fn create_pool(settings: &DbSettings) -> Result<PgPool, sqlx::Error> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(settings.acquire_timeout)
        .connect(&settings.url)
        .await?;

    sqlx::query(CREATE_MATCH_RECORDS).execute(&pool).await?;
    sqlx::query(CREATE_MATCH_RECORDS_CREATED_AT_IDX)
        .execute(&pool)
        .await?;
    debug!("match_records schema ensured");

    info!("PostgreSQL connection pool established");
    Ok(pool)
}
