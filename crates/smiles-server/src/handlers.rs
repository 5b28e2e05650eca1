//! HTTP Handlers

use axum::{Json, Router, routing::get};
use serde::Serialize;
use smiles_core::content::BRAND;
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::config::ServerConfig;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub site: &'static str,
    pub version: &'static str,
}

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        site: BRAND,
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Health check plus the built site, with unknown paths falling back to
/// `index.html`. Only GET and HEAD reach the files.
pub fn router(config: &ServerConfig) -> Router {
    let site = ServeDir::new(&config.site_dir).fallback(ServeFile::new(config.index_file()));

    Router::new()
        .route("/health", get(health_check))
        .fallback_service(site)
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{Body, to_bytes},
        http::{Method, Request, StatusCode},
    };
    use tower::ServiceExt;

    use super::*;

    fn site() -> (tempfile::TempDir, ServerConfig) {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<html>We Scale Smiles</html>").unwrap();
        let config = ServerConfig {
            site_dir: dir.path().to_path_buf(),
            ..ServerConfig::default()
        };
        (dir, config)
    }

    async fn send(app: Router, method: Method, uri: &str) -> (StatusCode, String) {
        let request = Request::builder().method(method).uri(uri).body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let (_dir, config) = site();
        let (status, body) = send(router(&config), Method::GET, "/health").await;

        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["site"], "We Scale Smiles");
    }

    #[tokio::test]
    async fn test_serves_index() {
        let (_dir, config) = site();
        let (status, body) = send(router(&config), Method::GET, "/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("We Scale Smiles"));
    }

    #[tokio::test]
    async fn test_unknown_path_falls_back_to_index() {
        let (_dir, config) = site();
        let (status, body) = send(router(&config), Method::GET, "/pricing").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("We Scale Smiles"));
    }

    #[tokio::test]
    async fn test_leads_are_not_accepted() {
        let (_dir, config) = site();
        let (status, _) = send(router(&config), Method::POST, "/leads").await;

        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }
}
