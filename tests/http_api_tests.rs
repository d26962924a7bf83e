//! HTTP API tests.
//!
//! Every route is exercised through the axum router with a scripted
//! generation service standing in for Vertex AI.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Response;
use serde_json::{json, Value};
use tower::ServiceExt;

use careerpath::{build_router, Container, GenerationMode, MockGeneration};

const BODY_LIMIT: usize = 1_048_576;

fn app_with(mock: Arc<MockGeneration>) -> axum::Router {
    build_router(Arc::new(Container::with_generation_service(
        mock,
        "does-not-exist",
    )))
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("build request")
}

async fn json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), BODY_LIMIT)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("parse json")
}

#[tokio::test]
async fn recommendation_returns_normalized_lists() {
    let mock = Arc::new(MockGeneration::with_reply(
        json!({
            "recommended_career": "Backend Developer",
            "roadmap": ["Month 1-3: Learn Rust", "Months 4-6: Ship a service"],
            "market_value": "Python, SQL, Git",
            "companies": [{"name": "Razorpay", "type": "Fintech"}]
        })
        .to_string(),
    ));
    let app = app_with(mock.clone());

    let response = app
        .oneshot(post_json(
            "/api/recommendation",
            json!({"interests": "systems", "education": "B.Tech", "aptitude": "high"}),
        ))
        .await
        .expect("router call");
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["market_value"], json!(["Python", "SQL", "Git"]));
    assert_eq!(
        body["roadmap"],
        json!(["Month 1-3: Learn Rust", "Months 4-6: Ship a service"])
    );
    assert_eq!(body["packages"], json!([]));
    assert_eq!(body["companies"][0]["name"], "Razorpay");

    let calls = mock.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].1, GenerationMode::Json);
    assert!(calls[0].0.contains("- Education: B.Tech"));
}

#[tokio::test]
async fn recommendation_reports_unparseable_model_output() {
    let app = app_with(Arc::new(MockGeneration::with_reply("not json")));

    let response = app
        .oneshot(post_json("/api/recommendation", json!({})))
        .await
        .expect("router call");
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        json_body(response).await,
        json!({"error": "Failed to parse AI model response."})
    );
}

#[tokio::test]
async fn recommendation_reports_upstream_failure() {
    let app = app_with(Arc::new(MockGeneration::failing("permission denied")));

    let response = app
        .oneshot(post_json("/api/recommendation", json!({"interests": "art"})))
        .await
        .expect("router call");
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = json_body(response).await;
    let error = body["error"].as_str().expect("error string");
    assert!(error.starts_with("An unexpected server error occurred: "));
    assert!(error.contains("permission denied"));
}

#[tokio::test]
async fn recommendation_accepts_empty_body() {
    let mock = Arc::new(MockGeneration::with_reply(r#"{"roadmap": "Explore, Decide"}"#));
    let app = app_with(mock.clone());

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/recommendation")
        .body(Body::empty())
        .expect("build request");
    let response = app.oneshot(request).await.expect("router call");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["roadmap"], json!(["Explore", "Decide"]));
    assert!(mock.calls()[0].0.contains("- Interests: \n"));
}

#[tokio::test]
async fn chat_strips_asterisks() {
    let mock = Arc::new(MockGeneration::with_reply("Hello * there *!"));
    let app = app_with(mock.clone());

    let response = app
        .oneshot(post_json("/api/chat", json!({"message": "hi"})))
        .await
        .expect("router call");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!({"reply": "Hello  there !"}));
    assert_eq!(mock.calls()[0].1, GenerationMode::PlainText);
}

#[tokio::test]
async fn chat_failure_still_returns_ok() {
    let app = app_with(Arc::new(MockGeneration::failing("deadline exceeded")));

    let response = app
        .oneshot(post_json("/api/chat", json!({"message": "hi"})))
        .await
        .expect("router call");
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    let reply = body["reply"].as_str().expect("reply string");
    assert!(reply.starts_with("Sorry, an error occurred: "));
    assert!(reply.contains("deadline exceeded"));
}

#[tokio::test]
async fn chat_passes_empty_reply_through() {
    let app = app_with(Arc::new(MockGeneration::with_reply("")));

    let response = app
        .oneshot(post_json("/api/chat", json!({})))
        .await
        .expect("router call");
    assert_eq!(json_body(response).await, json!({"reply": ""}));
}

#[tokio::test]
async fn index_serves_frontend_page() {
    let dir = tempfile::tempdir().expect("temp dir");
    std::fs::write(dir.path().join("index.html"), "<h1>Career Guide</h1>").expect("write page");

    let container = Container::with_generation_service(Arc::new(MockGeneration::new()), dir.path());
    let app = build_router(Arc::new(container));

    let request = Request::builder().uri("/").body(Body::empty()).expect("build request");
    let response = app.oneshot(request).await.expect("router call");
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), BODY_LIMIT).await.expect("read body");
    assert_eq!(&bytes[..], b"<h1>Career Guide</h1>");
}

#[tokio::test]
async fn index_falls_back_to_placeholder() {
    let app = app_with(Arc::new(MockGeneration::new()));

    let request = Request::builder().uri("/").body(Body::empty()).expect("build request");
    let response = app.oneshot(request).await.expect("router call");
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), BODY_LIMIT).await.expect("read body");
    assert!(String::from_utf8_lossy(&bytes).contains("/api/recommendation"));
}

#[tokio::test]
async fn health_reports_ok() {
    let app = app_with(Arc::new(MockGeneration::new()));

    let request = Request::builder().uri("/health").body(Body::empty()).expect("build request");
    let response = app.oneshot(request).await.expect("router call");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!({"status": "ok"}));
}

#[tokio::test]
async fn cors_preflight_is_allowed() {
    let app = app_with(Arc::new(MockGeneration::new()));

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/chat")
        .header(header::ORIGIN, "http://localhost:3000")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .expect("build request");
    let response = app.oneshot(request).await.expect("router call");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).map(|v| v.as_bytes()),
        Some(&b"*"[..])
    );
}
