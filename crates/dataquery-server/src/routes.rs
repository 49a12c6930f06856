//! Router
//!
//! `/health` plus the static bundle. Paths with no file behind them get the
//! index document so client-side routes load the app.

use axum::{Router, routing::get};
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::handlers::health_check;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let static_files = ServeDir::new(state.dist_dir.as_path())
        .append_index_html_on_directories(true)
        .fallback(ServeFile::new(state.index_file()));

    Router::new()
        .route("/health", get(health_check))
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    fn site_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<!DOCTYPE html><title>Wanda</title>").unwrap();
        std::fs::write(dir.path().join("app.js"), "console.log('app')").unwrap();
        dir
    }

    async fn get_body(router: Router, uri: &str) -> (StatusCode, String) {
        let response = router
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_health_reports_catalog() {
        let dir = site_dir();
        let router = build_router(AppState::new(dir.path().to_path_buf()));

        let (status, body) = get_body(router, "/health").await;
        assert_eq!(status, StatusCode::OK);

        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["bundle_ready"], true);
        assert_eq!(json["sections"], 5);
        assert_eq!(json["features"], 4);
        assert_eq!(json["plans"], 3);
        assert_eq!(json["testimonials"], 3);
        assert_eq!(json["catalog"], "valid");
        assert_eq!(json["highlighted_plan"], "Profissional");
    }

    #[tokio::test]
    async fn test_health_without_bundle() {
        let dir = tempfile::tempdir().unwrap();
        let router = build_router(AppState::new(dir.path().to_path_buf()));

        let (_, body) = get_body(router, "/health").await;
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["bundle_ready"], false);
    }

    #[tokio::test]
    async fn test_serves_static_asset() {
        let dir = site_dir();
        let router = build_router(AppState::new(dir.path().to_path_buf()));

        let (status, body) = get_body(router, "/app.js").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "console.log('app')");
    }

    #[tokio::test]
    async fn test_client_routes_fall_back_to_index() {
        let dir = site_dir();

        for uri in ["/", "/blog", "/privacidade", "/does/not/exist"] {
            let router = build_router(AppState::new(dir.path().to_path_buf()));
            let (status, body) = get_body(router, uri).await;
            assert_eq!(status, StatusCode::OK, "{uri}");
            assert!(body.contains("<title>Wanda</title>"), "{uri}");
        }
    }
}
