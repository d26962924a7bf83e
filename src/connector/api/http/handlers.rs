use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;
use tracing::{debug, error, warn};

use crate::connector::api::Container;
use crate::domain::{CareerProfileRequest, ChatMessage, ChatReply, DomainError};

pub const MALFORMED_OUTPUT_MESSAGE: &str = "Failed to parse AI model response.";

const PLACEHOLDER_PAGE: &str = "<!doctype html>
<html>
<head><meta charset=\"utf-8\"><title>Career Advisor</title></head>
<body>
<h1>Career Advisor API</h1>
<p>No frontend found. POST a profile to <code>/api/recommendation</code> or a message to <code>/api/chat</code>.</p>
</body>
</html>
";

/// Error body returned by the recommendation endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn from_domain(err: &DomainError) -> Self {
        let error = if err.is_malformed_output() {
            MALFORMED_OUTPUT_MESSAGE.to_string()
        } else {
            format!("An unexpected server error occurred: {}", err)
        };
        Self { error }
    }
}

pub async fn index(State(container): State<Arc<Container>>) -> Html<String> {
    let path = container.static_dir().join("index.html");
    match tokio::fs::read_to_string(&path).await {
        Ok(page) => Html(page),
        Err(e) => {
            debug!("Serving placeholder page, {} unavailable: {}", path.display(), e);
            Html(PLACEHOLDER_PAGE.to_string())
        }
    }
}

pub async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

pub async fn recommendation(State(container): State<Arc<Container>>, body: Bytes) -> Response {
    let profile: CareerProfileRequest = parse_body(&body);

    match container.recommend_use_case().execute(&profile).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => {
            if !e.is_malformed_output() {
                error!("Recommendation failed: {}", e);
            }
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::from_domain(&e)),
            )
                .into_response()
        }
    }
}

/// Always answers 200; failures are reported inside the reply text.
pub async fn chat(State(container): State<Arc<Container>>, body: Bytes) -> Json<ChatReply> {
    let message: ChatMessage = parse_body(&body);
    Json(container.chat_use_case().reply(&message).await)
}

/// Decode a JSON request body, treating an empty or undecodable body as `{}`.
fn parse_body<T: DeserializeOwned + Default>(body: &[u8]) -> T {
    if body.iter().all(u8::is_ascii_whitespace) {
        return T::default();
    }
    serde_json::from_slice(body).unwrap_or_else(|e| {
        warn!("Ignoring undecodable request body: {}", e);
        T::default()
    })
}
