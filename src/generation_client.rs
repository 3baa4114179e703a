use async_trait::async_trait;
use reqwest::{
    Client,
    header::{HeaderMap, HeaderValue},
};
use serde::{Deserialize, Serialize};

use crate::error::UpstreamError;

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";

/// Single-shot text generation: one prompt in, one text out.
#[async_trait]
pub trait GenerationService: Send + Sync {
    async fn generate_content(&self, prompt: &str) -> Result<String, UpstreamError>;
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

impl GenerateContentResponse {
    /// Joins the text parts of the first candidate.
    fn into_text(self) -> Result<String, UpstreamError> {
        let Some(candidate) = self.candidates.into_iter().next() else {
            let reason = self
                .prompt_feedback
                .and_then(|f| f.block_reason)
                .unwrap_or_else(|| "no candidates".to_string());
            return Err(UpstreamError::Malformed(format!(
                "generation returned no text: {reason}"
            )));
        };

        let text: String = candidate
            .content
            .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();

        if text.is_empty() {
            let reason = candidate.finish_reason.unwrap_or_else(|| "empty".to_string());
            return Err(UpstreamError::Malformed(format!(
                "generation returned no text: {reason}"
            )));
        }

        Ok(text)
    }
}

#[derive(Debug, Clone)]
pub struct GeminiClient {
    base_url: String,
    model: String,
    client: Client,
}

impl GeminiClient {
    pub fn new(base_url: &str, model: &str, api_key: &str) -> Result<Self, UpstreamError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-goog-api-key",
            HeaderValue::from_str(api_key)
                .map_err(|e| UpstreamError::Malformed(format!("invalid api key header: {e}")))?,
        );

        let client = reqwest::ClientBuilder::new()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            client,
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

#[async_trait]
impl GenerationService for GeminiClient {
    async fn generate_content(&self, prompt: &str) -> Result<String, UpstreamError> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        tracing::debug!(model = %self.model, prompt_len = prompt.len(), "gemini generate");

        let response = self
            .client
            .post(self.endpoint())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(UpstreamError::Status { status, body: text });
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&text).map_err(|e| {
            UpstreamError::Malformed(format!("failed to parse generation response: {e}"))
        })?;

        parsed.into_text()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joins_candidate_parts() {
        let parsed: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"Hello "},{"text":"world"}]},"finishReason":"STOP"}]}"#,
        )
        .unwrap();
        assert_eq!(parsed.into_text().unwrap(), "Hello world");
    }

    #[test]
    fn test_blocked_prompt_is_error() {
        let parsed: GenerateContentResponse =
            serde_json::from_str(r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#).unwrap();
        let err = parsed.into_text().unwrap_err();
        assert!(err.to_string().contains("SAFETY"));
    }

    #[test]
    fn test_candidate_without_text_is_error() {
        let parsed: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates":[{"finishReason":"RECITATION"}]}"#).unwrap();
        let err = parsed.into_text().unwrap_err();
        assert!(err.to_string().contains("RECITATION"));
    }

    #[test]
    fn test_endpoint() {
        let client = GeminiClient::new("http://localhost:1234/", "gemini-2.0-flash", "k").unwrap();
        assert_eq!(
            client.endpoint(),
            "http://localhost:1234/v1beta/models/gemini-2.0-flash:generateContent"
        );
    }
}
