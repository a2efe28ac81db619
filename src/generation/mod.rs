//! Requirement generation pipeline
//!
//! One pipeline serves every provider: validate the idea, call the
//! configured LLM, then normalize and segment its answer.

mod error;
pub mod gemini;
pub mod openai;

pub use error::GenerationError;

use serde::Deserialize;

use crate::config::{GenerationConfig, ProviderKind};
use crate::models::GenerationResult;
use crate::parsers;

/// Minimum idea length, in characters after trimming
pub const MIN_IDEA_CHARS: usize = 10;

/// HTTP client bound to one provider configuration
#[derive(Debug, Clone)]
pub struct LlmClient {
    http: reqwest::Client,
    config: GenerationConfig,
}

impl LlmClient {
    /// Create a client; the underlying connection pool is shared by clones
    pub fn new(config: GenerationConfig) -> Result<Self, GenerationError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("reqgen/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Send the idea to the provider and return its raw text
    pub async fn generate(&self, idea: &str) -> Result<String, GenerationError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(GenerationError::MissingApiKey {
                env_var: self.config.provider.api_key_env,
            })?;

        match self.config.provider.kind {
            ProviderKind::Gemini => gemini::generate(&self.http, &self.config, api_key, idea).await,
            ProviderKind::OpenAi => openai::generate(&self.http, &self.config, api_key, idea).await,
        }
    }
}

/// `{ "error": { "message": ... } }` as returned by both Gemini and OpenAI
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: Option<ApiErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: Option<String>,
}

/// Extract the upstream message from an error body, if it has one
fn parse_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .and_then(|e| e.message)
        .filter(|m| !m.trim().is_empty())
}

/// Rejected credentials show up as 401/403, or as a 400 naming the key (Gemini)
fn is_key_rejection(status: u16, message: &str) -> bool {
    matches!(status, 401 | 403) || message.contains("API key")
}

async fn upstream_error(
    provider_name: &'static str,
    response: reqwest::Response,
) -> GenerationError {
    let status = response.status().as_u16();
    let text = response.text().await.unwrap_or_default();
    log::warn!("{} API returned {}: {}", provider_name, status, text);

    let message = parse_error_message(&text)
        .unwrap_or_else(|| format!("{} API error: {}", provider_name, status));

    if is_key_rejection(status, &message) {
        return GenerationError::InvalidApiKey {
            provider: provider_name,
            status,
            message,
        };
    }
    GenerationError::Upstream { status, message }
}

/// Check an idea against the input rules and return it unchanged
pub fn validate_idea(idea: Option<&str>) -> Result<&str, GenerationError> {
    let idea = idea.ok_or(GenerationError::IdeaRequired)?;
    let trimmed = idea.trim();
    if trimmed.is_empty() {
        return Err(GenerationError::IdeaRequired);
    }

    let actual = trimmed.chars().count();
    if actual < MIN_IDEA_CHARS {
        return Err(GenerationError::IdeaTooShort {
            min: MIN_IDEA_CHARS,
            actual,
        });
    }

    Ok(idea)
}

/// Run the full pipeline for one request
pub async fn generate_requirements(
    client: &LlmClient,
    idea: Option<&str>,
) -> Result<GenerationResult, GenerationError> {
    let idea = validate_idea(idea)?;

    log::debug!(
        "Generating requirements with {} ({} chars of input)",
        client.config().provider.id,
        idea.len()
    );

    let raw = client.generate(idea).await?;
    let result = parsers::parse_generated(&raw);

    if result.sections.is_empty() {
        log::warn!(
            "No section headings recognised in {} chars of generated text",
            result.raw_content.len()
        );
    } else {
        log::debug!("Recognised {}/8 sections", result.sections.filled_count());
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_missing_and_blank() {
        assert!(matches!(validate_idea(None), Err(GenerationError::IdeaRequired)));
        assert!(matches!(
            validate_idea(Some("   \n ")),
            Err(GenerationError::IdeaRequired)
        ));
    }

    #[test]
    fn test_validate_too_short_after_trim() {
        let err = validate_idea(Some("   short    ")).unwrap_err();
        assert!(matches!(
            err,
            GenerationError::IdeaTooShort { min: 10, actual: 5 }
        ));
    }

    #[test]
    fn test_validate_counts_chars_not_bytes() {
        // 9 chars, 18 bytes
        assert!(validate_idea(Some("ééééééééé")).is_err());
        assert!(validate_idea(Some("éééééééééé")).is_ok());
    }

    #[test]
    fn test_validate_returns_idea_verbatim() {
        let idea = "  A marketplace for tutors  ";
        assert_eq!(validate_idea(Some(idea)).unwrap(), idea);
    }

    #[test]
    fn test_parse_error_message() {
        assert_eq!(
            parse_error_message(r#"{"error": {"code": 400, "message": "API key not valid"}}"#),
            Some("API key not valid".to_string())
        );
        assert_eq!(parse_error_message("<html>bad gateway</html>"), None);
        assert_eq!(parse_error_message(r#"{"error": {"message": ""}}"#), None);
    }

    #[test]
    fn test_key_rejection() {
        assert!(is_key_rejection(400, "API key not valid. Please pass a valid API key."));
        assert!(is_key_rejection(401, "Incorrect credentials"));
        assert!(is_key_rejection(403, "OpenAI API error: 403"));
        assert!(!is_key_rejection(429, "Resource has been exhausted"));
        assert!(!is_key_rejection(500, "Internal error"));
    }

    #[tokio::test]
    async fn test_missing_api_key() {
        let config = GenerationConfig::for_provider("gemini", None, None, None).unwrap();
        let client = LlmClient::new(config).unwrap();

        let err = generate_requirements(&client, Some("A long enough startup idea"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            GenerationError::MissingApiKey {
                env_var: "GEMINI_API_KEY"
            }
        ));
    }

    #[tokio::test]
    async fn test_validation_runs_before_key_check() {
        let config = GenerationConfig::for_provider("openai", None, None, None).unwrap();
        let client = LlmClient::new(config).unwrap();

        let err = generate_requirements(&client, Some("tiny")).await.unwrap_err();
        assert!(err.is_client_error());
    }
}
