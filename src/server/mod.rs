//! HTTP server for the trials dashboard.
//!
//! Routes:
//! - `GET /api/trials` — filtered, sorted, paginated trial rows
//! - `GET /api/trials/statuses` — known status codes and their labels
//! - `GET /health` — liveness probe

use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tower_http::trace::TraceLayer;

use crate::sources::TrialSource;

mod trials;

/// State shared by every request. The source is read-only.
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn TrialSource>,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/trials", get(trials::list_trials))
        .route("/api/trials/statuses", get(trials::list_statuses))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for Ctrl-C: {err}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down…");
}

/// Serves the dashboard API on `host:port` until Ctrl-C.
///
/// # Errors
///
/// Returns an error when the host is not an IP address, or when the TCP bind or
/// server loop fails.
pub async fn run_http(host: &str, port: u16, source: Arc<dyn TrialSource>) -> anyhow::Result<()> {
    let ip: std::net::IpAddr = host
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid host address: {e}"))?;
    let bind = SocketAddr::new(ip, port);

    let source_name = source.name().to_string();
    let app = router(AppState { source });

    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind HTTP server: {e}"))?;

    tracing::info!("Trials dashboard listening on http://{bind} (dataset: {source_name})");
    tracing::info!("  Trials endpoint:   GET http://{bind}/api/trials");
    tracing::info!("  Statuses endpoint: GET http://{bind}/api/trials/statuses");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use super::*;

    pub(super) async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = serde_json::from_slice(&bytes).unwrap();
        (status, value)
    }

    pub(super) fn embedded_app() -> Router {
        let source = crate::sources::embedded::EmbeddedSource::new().expect("embedded dataset");
        router(AppState {
            source: Arc::new(source),
        })
    }

    #[tokio::test]
    async fn health_reports_version() {
        let (status, body) = get_json(embedded_app(), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let response = embedded_app()
            .oneshot(Request::builder().uri("/api/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn run_http_rejects_bad_host() {
        let source = crate::sources::embedded::EmbeddedSource::new().expect("embedded dataset");
        let err = run_http("not-an-ip", 0, Arc::new(source))
            .await
            .expect_err("bad host");
        assert!(err.to_string().contains("Invalid host address"));
    }
}
