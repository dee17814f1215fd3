use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use super::traits::TextGenerator;
use super::types::{GenerateRequest, GenerateResponse};
use crate::constants::{
    DEFAULT_GEMINI_MODEL, DEFAULT_MAX_OUTPUT_TOKENS, DEFAULT_TEMPERATURE, GEMINI_API_BASE,
    HTTP_REQUEST_TIMEOUT_SECS,
};
use crate::utils::ConsultantError;

/// Gemini client configuration.
///
/// The API key is injected here once at construction; the client never
/// consults the process environment itself.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub api_base: String,
    pub temperature: f32,
    pub max_output_tokens: u32,
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_GEMINI_MODEL.to_string(),
            api_base: GEMINI_API_BASE.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.max_output_tokens = max_output_tokens;
        self
    }
}

/// Client for the Generative Language API `generateContent` endpoint
pub struct GeminiClient {
    config: GeminiConfig,
    client: Client,
}

impl GeminiClient {
    /// Create a new Gemini client
    pub fn new(config: GeminiConfig) -> Result<Self, ConsultantError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(HTTP_REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| ConsultantError::NetworkError(e.to_string()))?;

        Ok(Self { config, client })
    }

    fn api_url(&self) -> String {
        format!(
            "{}/{}:generateContent?key={}",
            self.config.api_base, self.config.model, self.config.api_key
        )
    }

    /// Build the JSON request body for the Gemini API
    fn build_request_body(&self, request: &GenerateRequest) -> serde_json::Value {
        json!({
            "contents": [{
                "parts": [{ "text": request.transcript }]
            }],
            "systemInstruction": {
                "parts": [{ "text": request.system_instruction }]
            },
            "generationConfig": {
                "temperature": self.config.temperature,
                "maxOutputTokens": self.config.max_output_tokens,
            }
        })
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(
        &self,
        request: GenerateRequest,
    ) -> Result<GenerateResponse, ConsultantError> {
        let body = self.build_request_body(&request);

        debug!(model = %self.config.model, "Gemini API request");

        let response = self
            .client
            .post(self.api_url())
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| ConsultantError::NetworkError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(ConsultantError::ApiError(format!("HTTP {status}: {text}")));
        }

        let response_json: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ConsultantError::ParseError(e.to_string()))?;

        Ok(GenerateResponse {
            text: extract_text(&response_json)?,
        })
    }
}

/// Concatenate the text parts of the first candidate.
///
/// A well-formed response with no text parts yields an empty string; the
/// session decides how to present that.
fn extract_text(response: &GenerateContentResponse) -> Result<String, ConsultantError> {
    let first = response
        .candidates
        .as_deref()
        .and_then(|c| c.first())
        .ok_or_else(|| ConsultantError::ParseError("no candidates in response".to_string()))?;

    let parts = first
        .content
        .as_ref()
        .map(|c| c.parts.as_slice())
        .unwrap_or_default();

    Ok(parts
        .iter()
        .filter_map(|p| p.text.as_deref())
        .collect::<Vec<_>>()
        .concat())
}

// Response structures for the Generative Language API

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}
