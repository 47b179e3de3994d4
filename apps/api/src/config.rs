use anyhow::{Context, Result};

const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:3000";

/// How the process receives requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeMode {
    /// Long-running server bound to a TCP port.
    Server,
    /// One request per invocation, driven by the AWS Lambda runtime.
    Lambda,
}

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub rust_log: String,
    pub allowed_origins: Vec<String>,
    pub db_max_connections: u32,
    pub db_acquire_timeout_secs: u64,
    pub mode: RuntimeMode,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            port: parse_env("PORT", 8000)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            allowed_origins: parse_origins(
                &std::env::var("ALLOWED_ORIGINS")
                    .unwrap_or_else(|_| DEFAULT_ALLOWED_ORIGINS.to_string()),
            ),
            db_max_connections: parse_env("DB_MAX_CONNECTIONS", 5)?,
            db_acquire_timeout_secs: parse_env("DB_ACQUIRE_TIMEOUT_SECS", 5)?,
            mode: detect_mode(std::env::var("AWS_LAMBDA_RUNTIME_API").ok().as_deref()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> Result<T> {
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| anyhow::anyhow!("{key} has an invalid value: '{raw}'")),
        Err(_) => Ok(default),
    }
}

/// Splits a comma-separated origin list, dropping blanks.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect()
}

/// The Lambda runtime always exports `AWS_LAMBDA_RUNTIME_API`.
fn detect_mode(lambda_runtime_api: Option<&str>) -> RuntimeMode {
    match lambda_runtime_api {
        Some(api) if !api.trim().is_empty() => RuntimeMode::Lambda,
        _ => RuntimeMode::Server,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins_splits_and_trims() {
        let origins = parse_origins(" http://localhost:3000 , https://jobfitcv.app,,");
        assert_eq!(
            origins,
            vec![
                "http://localhost:3000".to_string(),
                "https://jobfitcv.app".to_string()
            ]
        );
    }

    #[test]
    fn test_parse_origins_empty_string_yields_nothing() {
        assert!(parse_origins("").is_empty());
    }

    #[test]
    fn test_detect_mode_defaults_to_server() {
        assert_eq!(detect_mode(None), RuntimeMode::Server);
        assert_eq!(detect_mode(Some("  ")), RuntimeMode::Server);
    }

    #[test]
    fn test_detect_mode_lambda_when_runtime_api_set() {
        assert_eq!(detect_mode(Some("127.0.0.1:9001")), RuntimeMode::Lambda);
    }
}
