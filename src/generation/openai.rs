// OpenAI chat completions API
//
// - Endpoint: POST {base}/v1/chat/completions
// - Auth: Bearer token
// - System prompt goes in a system message, the idea in a user message
// - Output: choices[0].message.content

use serde::{Deserialize, Serialize};

use super::{upstream_error, GenerationError};
use crate::config::GenerationConfig;
use crate::templates;

#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
pub struct ChatMessage {
    pub role: &'static str,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: Option<ResponseMessage>,
}

#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    pub content: Option<String>,
}

pub fn endpoint_url(base_url: &str) -> String {
    format!("{}/v1/chat/completions", base_url)
}

pub fn build_request(model: &str, system_prompt: &str, user_prompt: String) -> ChatCompletionRequest {
    ChatCompletionRequest {
        model: model.to_string(),
        messages: vec![
            ChatMessage {
                role: "system",
                content: system_prompt.to_string(),
            },
            ChatMessage {
                role: "user",
                content: user_prompt,
            },
        ],
    }
}

pub fn extract_text(response: ChatCompletionResponse) -> Result<String, GenerationError> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message)
        .and_then(|m| m.content)
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| {
            GenerationError::MalformedResponse("OpenAI response contained no text".to_string())
        })
}

pub(super) async fn generate(
    http: &reqwest::Client,
    config: &GenerationConfig,
    api_key: &str,
    idea: &str,
) -> Result<String, GenerationError> {
    let user_prompt =
        templates::render_idea_prompt(idea).map_err(|e| GenerationError::Prompt(e.to_string()))?;
    let url = endpoint_url(&config.base_url);

    log::debug!("[OpenAI] POST {} (model {})", url, config.model);

    let request = build_request(
        &config.model,
        templates::REQUIREMENTS_SYSTEM_PROMPT,
        user_prompt,
    );

    let response = http
        .post(&url)
        .bearer_auth(api_key)
        .json(&request)
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(upstream_error("OpenAI", response).await);
    }

    let body: ChatCompletionResponse = response.json().await.map_err(|e| {
        GenerationError::MalformedResponse(format!("Failed to parse OpenAI response: {}", e))
    })?;

    extract_text(body)
}
