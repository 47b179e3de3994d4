//! Entry points: the same router served from a TCP listener or from AWS Lambda.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use axum::{http::HeaderValue, Router};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

use crate::config::Config;

/// CORS for an explicit origin allow-list with credentials.
/// Methods and headers mirror the preflight request.
pub fn cors_layer(origins: &[String]) -> Result<CorsLayer> {
    let origins = origins
        .iter()
        .map(|o| {
            HeaderValue::from_str(o).with_context(|| format!("Invalid CORS origin '{o}'"))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request()))
}

/// Wraps the router with request tracing and CORS.
pub fn with_middleware(router: Router, config: &Config) -> Result<Router> {
    let cors = cors_layer(&config.allowed_origins)?;
    Ok(router.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors),
    ))
}

/// Long-running server on `0.0.0.0:port`.
pub async fn serve_http(app: Router, port: u16) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Hands the router to the Lambda runtime: one response per invocation.
pub async fn serve_lambda(app: Router) -> Result<()> {
    info!("Running as AWS Lambda handler");
    lambda_http::run(app)
        .await
        .map_err(|e| anyhow::anyhow!("Lambda runtime error: {e}"))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{header, Method, Request, StatusCode},
        routing::get,
    };
    use tower::ServiceExt;

    use super::*;
    use crate::config::RuntimeMode;

    fn config(origins: &[&str]) -> Config {
        Config {
            database_url: "postgres://localhost/jobfit".to_string(),
            port: 8000,
            rust_log: "info".to_string(),
            allowed_origins: origins.iter().map(|o| o.to_string()).collect(),
            db_max_connections: 1,
            db_acquire_timeout_secs: 1,
            mode: RuntimeMode::Server,
        }
    }

    fn app(origins: &[&str]) -> Router {
        let router = Router::new().route("/health", get(|| async { "ok" }));
        with_middleware(router, &config(origins)).unwrap()
    }

    #[test]
    fn test_cors_layer_rejects_invalid_origin() {
        assert!(cors_layer(&["bad\norigin".to_string()]).is_err());
    }

    #[tokio::test]
    async fn test_allowed_origin_is_echoed_with_credentials() {
        let response = app(&["http://localhost:3000"])
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .header(header::ORIGIN, "http://localhost:3000")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let headers = response.headers();
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "http://localhost:3000"
        );
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(),
            "true"
        );
    }

    #[tokio::test]
    async fn test_unlisted_origin_gets_no_cors_headers() {
        let response = app(&["http://localhost:3000"])
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .header(header::ORIGIN, "https://evil.example")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none());
    }

    #[tokio::test]
    async fn test_preflight_mirrors_requested_method() {
        let response = app(&["http://localhost:3000"])
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/health")
                    .header(header::ORIGIN, "http://localhost:3000")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_METHODS)
                .unwrap(),
            "POST"
        );
    }
}
