//! Gemini-style generate-content client.

use super::{Completion, CompletionClient};
use crate::config::CompletionSettings;
use crate::error::{LaerError, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, error, instrument};

/// Sampling parameters sent with every request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
    pub top_k: u32,
    pub top_p: f32,
    pub max_output_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            top_k: 40,
            top_p: 0.95,
            max_output_tokens: 1024,
        }
    }
}

/// Everything the client needs to reach the completion service.
#[derive(Debug, Clone)]
pub struct CompletionConfig {
    pub api_url: String,
    pub api_key: String,
    pub generation: GenerationConfig,
    pub timeout: Duration,
}

impl CompletionConfig {
    /// Build from settings, failing if the endpoint or token is missing.
    pub fn from_settings(settings: &CompletionSettings) -> Result<Self> {
        let api_url = required(settings.api_url.as_deref(), "completion endpoint URL (GEMINI_API_URL)")?;
        let api_key = required(settings.api_key.as_deref(), "API key (GEMINI_API_KEY)")?;

        Ok(Self {
            api_url,
            api_key,
            generation: GenerationConfig {
                temperature: settings.temperature,
                top_k: settings.top_k,
                top_p: settings.top_p,
                max_output_tokens: settings.max_output_tokens,
            },
            timeout: Duration::from_secs(settings.timeout_secs),
        })
    }
}

fn required(value: Option<&str>, what: &str) -> Result<String> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(LaerError::Config(format!("No {} configured", what))),
    }
}

// === Wire types ===

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    generation_config: &'a GenerationConfig,
}

#[derive(Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

/// Why a single request failed. Never leaves this module.
#[derive(Debug, Error)]
enum RequestError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("{status} for url ({url})")]
    Status {
        status: reqwest::StatusCode,
        url: String,
        body: String,
    },

    #[error("unexpected response shape: {0}")]
    MalformedResponse(String),
}

impl RequestError {
    fn body(&self) -> Option<&str> {
        match self {
            RequestError::Status { body, .. } if !body.is_empty() => Some(body),
            _ => None,
        }
    }
}

/// Completion client for a Gemini-compatible generate-content endpoint.
pub struct GeminiClient {
    http: reqwest::Client,
    config: CompletionConfig,
}

impl GeminiClient {
    /// Create a client with its own connection pool and timeout.
    pub fn new(config: CompletionConfig) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { http, config })
    }

    async fn request(&self, prompt: &str) -> std::result::Result<String, RequestError> {
        let payload = GenerateRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config: &self.config.generation,
        };

        let response = self
            .http
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let url = response.url().to_string();
            let body = response.text().await.unwrap_or_default();
            return Err(RequestError::Status { status, url, body });
        }

        let body: GenerateResponse = response.json().await?;
        body.candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .and_then(|p| p.text)
            .ok_or_else(|| RequestError::MalformedResponse("no candidate text".to_string()))
    }
}

#[async_trait]
impl CompletionClient for GeminiClient {
    #[instrument(skip(self, prompt), fields(prompt_chars = prompt.chars().count()))]
    async fn generate(&self, prompt: &str) -> Completion {
        match self.request(prompt).await {
            Ok(text) => {
                debug!("Received {} characters of completion", text.len());
                Completion::Text(text)
            }
            Err(e) => {
                error!("Error calling Gemini API: {}", e);
                error!(
                    "Response content: {}",
                    e.body().unwrap_or("No response content")
                );
                Completion::failed(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::completion::FAILURE_MARKER;
    use crate::test_support::spawn_server;
    use axum::{extract::State, http::HeaderMap, http::StatusCode, routing::post, Json, Router};
    use std::sync::{Arc, Mutex};

    type Captured = Arc<Mutex<Vec<(Option<String>, serde_json::Value)>>>;

    fn config_for(api_url: String) -> CompletionConfig {
        CompletionConfig {
            api_url,
            api_key: "test-key".to_string(),
            generation: GenerationConfig::default(),
            timeout: Duration::from_secs(5),
        }
    }

    async fn echo_server(captured: Captured) -> String {
        async fn handler(
            State(captured): State<Captured>,
            headers: HeaderMap,
            Json(body): Json<serde_json::Value>,
        ) -> Json<serde_json::Value> {
            let auth = headers
                .get("authorization")
                .and_then(|v| v.to_str().ok())
                .map(str::to_string);
            captured.lock().unwrap().push((auth, body));
            Json(serde_json::json!({
                "candidates": [{"content": {"parts": [{"text": "generated text"}]}}]
            }))
        }

        let router = Router::new()
            .route("/generate", post(handler))
            .with_state(captured);
        let addr = spawn_server(router).await;
        format!("http://{}/generate", addr)
    }

    #[test]
    fn test_from_settings_requires_token() {
        let mut settings = CompletionSettings {
            api_url: Some("http://localhost/generate".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            CompletionConfig::from_settings(&settings),
            Err(LaerError::Config(_))
        ));

        settings.api_key = Some("   ".to_string());
        assert!(CompletionConfig::from_settings(&settings).is_err());

        settings.api_key = Some("key".to_string());
        let config = CompletionConfig::from_settings(&settings).unwrap();
        assert_eq!(config.api_key, "key");
        assert_eq!(config.generation, GenerationConfig::default());
    }

    #[test]
    fn test_from_settings_requires_endpoint() {
        let settings = CompletionSettings {
            api_key: Some("key".to_string()),
            ..Default::default()
        };
        assert!(CompletionConfig::from_settings(&settings).is_err());
    }

    #[tokio::test]
    async fn test_generate_sends_payload_and_returns_first_candidate() {
        let captured: Captured = Arc::default();
        let url = echo_server(captured.clone()).await;
        let client = GeminiClient::new(config_for(url)).unwrap();

        let completion = client.generate("Summarize this").await;
        assert_eq!(completion, Completion::Text("generated text".to_string()));

        let calls = captured.lock().unwrap();
        assert_eq!(calls.len(), 1);
        let (auth, body) = &calls[0];
        assert_eq!(auth.as_deref(), Some("Bearer test-key"));
        assert_eq!(body["contents"][0]["parts"][0]["text"], "Summarize this");
        assert_eq!(body["generationConfig"]["temperature"], 0.7);
        assert_eq!(body["generationConfig"]["topK"], 40);
        assert_eq!(body["generationConfig"]["topP"], 0.95);
        assert_eq!(body["generationConfig"]["maxOutputTokens"], 1024);
    }

    #[tokio::test]
    async fn test_non_success_status_becomes_placeholder() {
        let router = Router::new().route(
            "/generate",
            post(|| async { (StatusCode::UNAUTHORIZED, "bad token") }),
        );
        let addr = spawn_server(router).await;
        let client = GeminiClient::new(config_for(format!("http://{}/generate", addr))).unwrap();

        let completion = client.generate("anything").await;
        assert!(completion.is_failed());
        assert!(completion.text().starts_with(FAILURE_MARKER));
        assert!(completion.text().contains("401"));

        // The placeholder is still parseable text.
        let _ = crate::study::parse_quiz(completion.text(), 3);
        let _ = crate::study::parse_flashcards(completion.text());
    }

    #[tokio::test]
    async fn test_unexpected_body_becomes_placeholder() {
        let router = Router::new().route(
            "/generate",
            post(|| async { Json(serde_json::json!({"candidates": []})) }),
        );
        let addr = spawn_server(router).await;
        let client = GeminiClient::new(config_for(format!("http://{}/generate", addr))).unwrap();

        let completion = client.generate("anything").await;
        assert!(completion.is_failed());
        assert!(completion.text().contains("no candidate text"));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_becomes_placeholder() {
        // Bind then drop a listener to get a port nobody is serving.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = GeminiClient::new(config_for(format!("http://{}/generate", addr))).unwrap();
        let completion = client.generate("anything").await;
        assert!(completion.is_failed());
        assert!(completion.text().starts_with(FAILURE_MARKER));
    }
}
