//! HTTP API for the article pipeline.
//!
//! Three JSON endpoints mirror the stages of the flow: `/api/parse` fetches
//! and extracts, `/api/translate` translates, `/api/analyze` derives an
//! artifact. The router is built by [`app`] so tests can drive it in-process.

pub mod config;
pub mod error;
pub mod handlers;

use std::time::Duration;

use axum::Router;
use axum::routing::post;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;

/// Builds the application router.
pub fn app() -> Router {
    Router::new()
        .route("/api/parse", post(handlers::parse_article))
        .route("/api/translate", post(handlers::translate))
        .route("/api/analyze", post(handlers::analyze))
        .layer(CorsLayer::permissive())
        // Backstop above the per-call 30s deadlines inside the pipeline.
        .layer(TimeoutLayer::new(Duration::from_secs(60)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    async fn post_json(path: &str, payload: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string()))
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    #[tokio::test]
    async fn test_parse_requires_url() {
        let (status, body) = post_json("/api/parse", json!({})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "URL не предоставлен");

        let (status, _) = post_json("/api/parse", json!({ "url": "   " })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_parse_rejects_malformed_url() {
        let (status, body) = post_json("/api/parse", json!({ "url": "not a url" })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("Некорректный URL"));

        let (status, _) = post_json("/api/parse", json!({ "url": "ftp://example.com" })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_translate_requires_text() {
        let (status, body) = post_json("/api/translate", json!({})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Текст для перевода не предоставлен");
    }

    #[tokio::test]
    async fn test_analyze_requires_text_and_action() {
        let (status, body) = post_json("/api/analyze", json!({ "action": "summary" })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Текст для анализа не предоставлен");

        let (status, body) = post_json("/api/analyze", json!({ "text": "текст" })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Действие не указано");
    }

    #[tokio::test]
    async fn test_analyze_rejects_unknown_action() {
        // Rejected during validation, before any credential or upstream call.
        let payload = json!({ "text": "текст", "action": "poem" });
        let (status, body) = post_json("/api/analyze", payload).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("poem"));
        assert!(body["error"].as_str().unwrap().contains("summary, theses, telegram"));
    }

    #[tokio::test]
    async fn test_wrong_method_is_rejected() {
        let request = Request::builder()
            .method("GET")
            .uri("/api/parse")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/nope")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{}"))
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
