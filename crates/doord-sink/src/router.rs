use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::handler::{self, SinkState};

/// Build the axum router: health check plus a catch-all append route.
///
/// Only `GET /v1/health` is special; every other method on that path goes
/// to the append handler like any other path.
pub fn build_router(state: Arc<SinkState>) -> Router {
    Router::new()
        .route(
            "/v1/health",
            get(handler::health_handler).fallback(handler::append_handler),
        )
        .fallback(handler::append_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SinkConfig;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use std::path::PathBuf;
    use tower::util::ServiceExt;

    fn app(config: SinkConfig) -> Router {
        build_router(Arc::new(SinkState::new(config)))
    }

    fn post(uri: &str, body: &'static str, length: Option<&str>) -> Request<Body> {
        let mut req = Request::builder().method("POST").uri(uri);
        if let Some(length) = length {
            req = req.header(header::CONTENT_LENGTH, length);
        }
        req.body(Body::from(body)).unwrap()
    }

    fn read(path: &PathBuf) -> String {
        std::fs::read_to_string(path).unwrap()
    }

    #[tokio::test]
    async fn post_appends_line() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.log");
        let response = app(SinkConfig::new(&out))
            .oneshot(post("/", "hello", Some("5")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
        assert!(body.is_empty());
        assert_eq!(read(&out), "hello\n");
    }

    #[tokio::test]
    async fn any_path_is_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.log");
        let app = app(SinkConfig::new(&out));
        for uri in ["/doord", "/some/other/path"] {
            let response = app.clone().oneshot(post(uri, "x", Some("1"))).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }
        assert_eq!(read(&out), "x\nx\n");
    }

    #[tokio::test]
    async fn post_to_health_path_is_appended() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.log");
        let app = app(SinkConfig::new(&out));

        let response = app.clone().oneshot(post("/v1/health", "hello", Some("5"))).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(read(&out), "hello\n");

        let put = Request::builder()
            .method("PUT")
            .uri("/v1/health")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(put).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_IMPLEMENTED);
        assert_eq!(read(&out), "hello\n");
    }

    #[tokio::test]
    async fn content_is_not_inspected() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.log");
        let response = app(SinkConfig::new(&out))
            .oneshot(post("/doord", "{not json", Some("9")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(read(&out), "{not json\n");
    }

    #[tokio::test]
    async fn missing_length_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.log");
        let response = app(SinkConfig::new(&out))
            .oneshot(post("/", "hello", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::LENGTH_REQUIRED);
        assert!(!out.exists());
    }

    #[tokio::test]
    async fn oversized_length_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.log");
        let config = SinkConfig {
            max_body_size: 4,
            ..SinkConfig::new(&out)
        };
        let response = app(config).oneshot(post("/", "hello", Some("5"))).await.unwrap();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert!(!out.exists());
    }

    #[tokio::test]
    async fn short_body_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.log");
        let response = app(SinkConfig::new(&out))
            .oneshot(post("/", "hello", Some("10")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(!out.exists());
    }

    #[tokio::test]
    async fn long_body_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.log");
        let response = app(SinkConfig::new(&out))
            .oneshot(post("/", "hello", Some("3")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(!out.exists());
    }

    #[tokio::test]
    async fn get_is_not_implemented() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.log");
        let response = app(SinkConfig::new(&out))
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_IMPLEMENTED);
    }

    #[tokio::test]
    async fn unwritable_output_is_server_error() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("missing/out.log");
        let response = app(SinkConfig::new(&out))
            .oneshot(post("/", "hello", Some("5")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
