//! Gemini API client.
//!
//! Provides non-streaming access to the `generateContent` endpoint.

use std::sync::Arc;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use tracing::instrument;

use crate::config::GeminiConfig;

use super::error::{ApiErrorResponse, GeminiError};
use super::types::{Content, GenerateRequest, GenerateResponse};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Gemini API client.
///
/// Issues one request per call; the caller decides what to do with the
/// returned text. No retry, no timeout beyond the transport defaults, no
/// cancellation.
#[derive(Clone)]
pub struct GeminiClient {
    inner: Arc<GeminiClientInner>,
}

struct GeminiClientInner {
    client: reqwest::Client,
    model: String,
}

impl GeminiClient {
    /// Create a new Gemini client.
    ///
    /// # Arguments
    ///
    /// * `config` - Gemini configuration containing API key and model
    ///
    /// # Panics
    ///
    /// Panics if the API key contains invalid header characters.
    #[must_use]
    pub fn new(config: &GeminiConfig) -> Self {
        let api_key = config.api_key.expose_secret();

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let mut key_value =
            HeaderValue::from_str(api_key).expect("Invalid API key for header");
        key_value.set_sensitive(true);
        headers.insert("x-goog-api-key", key_value);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            inner: Arc::new(GeminiClientInner {
                client,
                model: config.model.clone(),
            }),
        }
    }

    /// Send a generation request and return the first candidate's text.
    ///
    /// # Arguments
    ///
    /// * `contents` - Conversation turns, oldest first
    /// * `system_instruction` - Optional system instruction
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the API returns an error
    /// response, or no candidate text was produced.
    #[instrument(skip(self, contents, system_instruction), fields(model = %self.inner.model))]
    pub async fn generate(
        &self,
        contents: Vec<Content>,
        system_instruction: Option<String>,
    ) -> Result<String, GeminiError> {
        let request = GenerateRequest {
            contents,
            system_instruction: system_instruction.map(Content::system),
        };

        let url = format!(
            "{GEMINI_API_BASE}/models/{}:generateContent",
            self.inner.model
        );

        let response = self.inner.client.post(&url).json(&request).send().await?;

        self.handle_response(response).await
    }

    /// Handle a response, extracting the candidate text on success.
    async fn handle_response(
        &self,
        response: reqwest::Response,
    ) -> Result<String, GeminiError> {
        let status = response.status();

        if status.is_success() {
            let body = response.text().await?;
            let parsed: GenerateResponse = serde_json::from_str(&body)
                .map_err(|e| GeminiError::Parse(format!("Failed to parse response: {e}")))?;
            extract_text(&parsed)
        } else {
            Err(self.handle_error_status(status, response).await)
        }
    }

    /// Handle an error status code.
    async fn handle_error_status(
        &self,
        status: reqwest::StatusCode,
        response: reqwest::Response,
    ) -> GeminiError {
        // Check for rate limiting
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse().ok())
                .unwrap_or(60);
            return GeminiError::RateLimited(retry_after);
        }

        // Check for unauthorized
        if status == reqwest::StatusCode::UNAUTHORIZED
            || status == reqwest::StatusCode::FORBIDDEN
        {
            return GeminiError::Unauthorized("Invalid API key".to_string());
        }

        // Try to parse API error response
        match response.text().await {
            Ok(body) => {
                if let Ok(api_error) = serde_json::from_str::<ApiErrorResponse>(&body) {
                    GeminiError::Api {
                        status: api_error.error.status,
                        message: api_error.error.message,
                    }
                } else {
                    GeminiError::Api {
                        status: "UNKNOWN".to_string(),
                        message: body,
                    }
                }
            }
            Err(e) => GeminiError::Http(e),
        }
    }
}

/// Pull the first candidate's text out of a response.
fn extract_text(response: &GenerateResponse) -> Result<String, GeminiError> {
    let text = response
        .candidates
        .first()
        .and_then(|c| c.content.as_ref())
        .map(Content::text)
        .unwrap_or_default();

    if text.is_empty() {
        Err(GeminiError::Empty)
    } else {
        Ok(text)
    }
}
