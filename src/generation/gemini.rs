// Google Gemini generateContent API
//
// - Endpoint: POST {base}/v1beta/models/{model}:generateContent
// - Auth: x-goog-api-key header
// - No system role: system prompt and idea go in one text part
// - Output: candidates[0].content.parts[0].text

use serde::{Deserialize, Serialize};

use super::{upstream_error, GenerationError};
use crate::config::GenerationConfig;
use crate::templates;

#[derive(Debug, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<RequestContent>,
}

#[derive(Debug, Serialize)]
pub struct RequestContent {
    pub parts: Vec<RequestPart>,
}

#[derive(Debug, Serialize)]
pub struct RequestPart {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
pub struct ResponsePart {
    pub text: Option<String>,
}

/// Full URL of the generateContent endpoint for a model
pub fn endpoint_url(base_url: &str, model: &str) -> String {
    format!("{}/v1beta/models/{}:generateContent", base_url, model)
}

/// Wrap a prompt in a single-turn request body
pub fn build_request(prompt: String) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![RequestContent {
            parts: vec![RequestPart { text: prompt }],
        }],
    }
}

/// Pull the generated text out of a response
pub fn extract_text(response: GenerateContentResponse) -> Result<String, GenerationError> {
    response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .and_then(|c| c.parts.into_iter().next())
        .and_then(|p| p.text)
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| {
            GenerationError::MalformedResponse("Gemini response contained no text".to_string())
        })
}

pub(super) async fn generate(
    http: &reqwest::Client,
    config: &GenerationConfig,
    api_key: &str,
    idea: &str,
) -> Result<String, GenerationError> {
    let prompt = templates::render_combined_prompt(idea)
        .map_err(|e| GenerationError::Prompt(e.to_string()))?;
    let url = endpoint_url(&config.base_url, &config.model);

    log::debug!("[Gemini] POST {} (prompt {} chars)", url, prompt.len());

    let response = http
        .post(&url)
        .header("x-goog-api-key", api_key)
        .json(&build_request(prompt))
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(upstream_error("Gemini", response).await);
    }

    let body: GenerateContentResponse = response.json().await.map_err(|e| {
        GenerationError::MalformedResponse(format!("Failed to parse Gemini response: {}", e))
    })?;

    extract_text(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_url() {
        assert_eq!(
            endpoint_url("https://generativelanguage.googleapis.com", "gemini-2.0-flash"),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent"
        );
    }

    #[test]
    fn test_request_shape() {
        let body = serde_json::to_value(build_request("hello".to_string())).unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "contents": [{ "parts": [{ "text": "hello" }] }] })
        );
    }

    #[test]
    fn test_extract_text() {
        let json = r#"{
            "candidates": [{
                "content": { "parts": [{ "text": "1. PRODUCT OVERVIEW\nText" }, { "text": "ignored" }], "role": "model" },
                "finishReason": "STOP"
            }]
        }"#;
        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(extract_text(response).unwrap(), "1. PRODUCT OVERVIEW\nText");
    }

    #[test]
    fn test_extract_text_no_candidates() {
        let response: GenerateContentResponse =
            serde_json::from_str(r#"{"promptFeedback": {"blockReason": "SAFETY"}}"#).unwrap();
        let err = extract_text(response).unwrap_err();
        assert!(matches!(err, GenerationError::MalformedResponse(_)));
    }

    #[test]
    fn test_extract_text_missing_content() {
        let response: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates": [{"finishReason": "SAFETY"}]}"#).unwrap();
        assert!(extract_text(response).is_err());
    }
}
