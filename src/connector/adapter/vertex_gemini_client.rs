use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::application::GenerationService;
use crate::domain::{DomainError, GenerationMode};

pub const DEFAULT_PROJECT: &str = "career-472010";
pub const DEFAULT_LOCATION: &str = "us-central1";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Connection settings for Vertex AI, resolved once at startup.
#[derive(Debug, Clone)]
pub struct VertexConfig {
    pub project: String,
    pub location: String,
    pub model: String,
    /// OAuth bearer token (e.g. from `gcloud auth print-access-token`).
    pub access_token: Option<String>,
    /// Overrides `https://{location}-aiplatform.googleapis.com`.
    pub base_url: Option<String>,
}

impl Default for VertexConfig {
    fn default() -> Self {
        Self {
            project: DEFAULT_PROJECT.to_string(),
            location: DEFAULT_LOCATION.to_string(),
            model: DEFAULT_MODEL.to_string(),
            access_token: None,
            base_url: None,
        }
    }
}

impl VertexConfig {
    pub fn base_url(&self) -> String {
        match &self.base_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!("https://{}-aiplatform.googleapis.com", self.location),
        }
    }

    pub fn endpoint(&self) -> String {
        format!(
            "{}/v1/projects/{}/locations/{}/publishers/google/models/{}:generateContent",
            self.base_url(),
            self.project,
            self.location,
            self.model
        )
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct RequestContent<'a> {
    role: &'a str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
}

/// Subset of the `generateContent` response we read.
#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// HTTP client for the Vertex AI Gemini `generateContent` REST API.
///
/// Built once from a [`VertexConfig`] and shared by every request. Each
/// [`generate`](GenerationService::generate) call issues exactly one POST; there
/// is no retry. The requested [`GenerationMode`] is forwarded as
/// `generationConfig.responseMimeType`.
pub struct VertexGeminiClient {
    client: reqwest::Client,
    access_token: Option<String>,
    /// Full endpoint URL including the `:generateContent` verb.
    url: String,
    model: String,
}

impl VertexGeminiClient {
    pub fn new(config: &VertexConfig) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| DomainError::config(format!("failed to build HTTP client: {e}")))?;

        if config.access_token.is_none() {
            warn!("No Vertex AI access token configured; requests will be sent unauthenticated");
        }

        Ok(Self {
            client,
            access_token: config.access_token.clone(),
            url: config.endpoint(),
            model: config.model.clone(),
        })
    }

    fn build_request<'a>(prompt: &'a str, mode: GenerationMode) -> GenerateContentRequest<'a> {
        GenerateContentRequest {
            contents: vec![RequestContent {
                role: "user",
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: mode.mime_type(),
            },
        }
    }

    /// Concatenate the text parts of the first candidate.
    fn extract_text(response: GenerateContentResponse) -> Result<String, DomainError> {
        let candidate = response
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| DomainError::upstream("Vertex AI returned no candidates"))?;

        let parts = candidate.content.map(|c| c.parts).unwrap_or_default();
        if parts.is_empty() {
            let reason = candidate.finish_reason.as_deref().unwrap_or("unknown");
            return Err(DomainError::upstream(format!(
                "Vertex AI returned an empty candidate (finish reason: {reason})"
            )));
        }

        Ok(parts.into_iter().filter_map(|p| p.text).collect())
    }

    fn describe_error(body: &str) -> String {
        serde_json::from_str::<ApiErrorBody>(body)
            .map(|b| b.error.message)
            .unwrap_or_else(|_| body.chars().take(200).collect())
    }
}

#[async_trait]
impl GenerationService for VertexGeminiClient {
    async fn generate(&self, prompt: &str, mode: GenerationMode) -> Result<String, DomainError> {
        let request = Self::build_request(prompt, mode);

        let mut builder = self.client.post(&self.url).json(&request);
        if let Some(token) = &self.access_token {
            builder = builder.bearer_auth(token);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| DomainError::upstream(format!("Vertex AI request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("Vertex AI returned {status}: {body}");
            return Err(DomainError::upstream(format!(
                "Vertex AI returned {status}: {}",
                Self::describe_error(&body)
            )));
        }

        let api_response: GenerateContentResponse = response.json().await.map_err(|e| {
            DomainError::upstream(format!("failed to parse Vertex AI response: {e}"))
        })?;

        let text = Self::extract_text(api_response)?;
        debug!("{} returned {} chars", self.model, text.len());
        Ok(text)
    }

    fn name(&self) -> &str {
        &self.model
    }
}
