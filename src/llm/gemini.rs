//! Google Gemini completion client.
//!
//! Calls the Gen AI `generateContent` REST endpoint directly. The API
//! key travels as the `key` query parameter; request bodies use the
//! Gemini `contents`/`parts` shape and response text is read from
//! `candidates[0].content.parts`.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use super::GenerativeBackend;
use crate::errors::GenerationError;

/// Per-attempt timeout. Bounds each candidate call so one stuck model
/// cannot delay fallback to the next candidate or to scripted mode.
const ATTEMPT_TIMEOUT: Duration = Duration::from_secs(30);

/// Gemini API base.
const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Client for the Gemini API. Cheap to clone; holds a pooled HTTP
/// client and is immutable after construction.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    api_key: String,
    http: reqwest::Client,
}

impl GeminiClient {
    /// Create a client bound to the given API key.
    pub fn new(api_key: impl Into<String>) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(ATTEMPT_TIMEOUT).build()?;
        Ok(Self {
            api_key: api_key.into(),
            http,
        })
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/{}:generateContent", API_BASE, model)
    }

    fn build_request_body(prompt: &str) -> Value {
        serde_json::json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": prompt }],
            }]
        })
    }

    /// Extract the reply text from a `generateContent` response.
    fn parse_response(response: &Value) -> Result<String, GenerationError> {
        if let Some(error) = response.get("error") {
            let status = error.get("code").and_then(|c| c.as_u64()).unwrap_or(0) as u16;
            let message = error
                .get("message")
                .and_then(|m| m.as_str())
                .unwrap_or("unknown backend error")
                .to_string();
            return Err(GenerationError::Api { status, message });
        }

        let parts = response
            .get("candidates")
            .and_then(|c| c.as_array())
            .and_then(|c| c.first())
            .and_then(|c| c.get("content"))
            .and_then(|c| c.get("parts"))
            .and_then(|p| p.as_array())
            .ok_or_else(|| {
                GenerationError::Malformed("no candidates[0].content.parts in response".into())
            })?;

        let text: String = parts
            .iter()
            .filter_map(|part| part.get("text").and_then(|t| t.as_str()))
            .collect();

        if text.trim().is_empty() {
            return Err(GenerationError::EmptyResponse);
        }
        Ok(text)
    }
}

#[async_trait]
impl GenerativeBackend for GeminiClient {
    async fn generate(&self, model: &str, prompt: &str) -> Result<String, GenerationError> {
        log::debug!(
            "GeminiClient.generate: model={}, prompt_len={}",
            model,
            prompt.len()
        );

        let response = self
            .http
            .post(self.endpoint(model))
            .header("content-type", "application/json")
            .query(&[("key", self.api_key.as_str())])
            .json(&Self::build_request_body(prompt))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            // Error detail rides in the JSON body when the API produced one.
            let message = serde_json::from_str::<Value>(&body)
                .ok()
                .and_then(|v| {
                    v.get("error")?
                        .get("message")?
                        .as_str()
                        .map(str::to_string)
                })
                .unwrap_or_else(|| body.chars().take(200).collect());
            return Err(GenerationError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let json: Value = serde_json::from_str(&body)
            .map_err(|e| GenerationError::Malformed(format!("invalid JSON: {}", e)))?;

        Self::parse_response(&json)
    }
}
