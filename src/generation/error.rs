use thiserror::Error;

/// Failures of a single generation request
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Idea is required")]
    IdeaRequired,

    #[error("Idea too short: need at least {min} characters, got {actual}")]
    IdeaTooShort { min: usize, actual: usize },

    #[error("Missing API key: {env_var} is not set")]
    MissingApiKey { env_var: &'static str },

    #[error("{provider} rejected the API key ({status}): {message}")]
    InvalidApiKey {
        provider: &'static str,
        status: u16,
        message: String,
    },

    #[error("Upstream API error ({status}): {message}")]
    Upstream { status: u16, message: String },

    #[error("Request to provider failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Malformed provider response: {0}")]
    MalformedResponse(String),

    #[error("Failed to build prompt: {0}")]
    Prompt(String),
}

impl GenerationError {
    /// True for errors caused by the caller's input
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            GenerationError::IdeaRequired | GenerationError::IdeaTooShort { .. }
        )
    }

    /// True when the provider refused the configured key
    pub fn is_auth_error(&self) -> bool {
        matches!(self, GenerationError::InvalidApiKey { .. })
    }

    /// Short title for the `error` field of the response body
    pub fn title(&self) -> &'static str {
        match self {
            GenerationError::IdeaRequired => "Idea is required",
            GenerationError::IdeaTooShort { .. } => "Idea too short",
            GenerationError::MissingApiKey { .. } => "Configuration error",
            GenerationError::InvalidApiKey { .. } => "Invalid API key",
            _ => "Generation failed",
        }
    }

    /// Message shown to the user
    pub fn user_message(&self) -> String {
        match self {
            GenerationError::IdeaRequired => {
                "Please provide a startup idea to generate requirements.".to_string()
            }
            GenerationError::IdeaTooShort { .. } => {
                "Please provide a more detailed description of your startup idea.".to_string()
            }
            GenerationError::MissingApiKey { env_var } => format!(
                "{} is not configured. Set it in the environment or in ~/.reqgen/secrets.toml.",
                env_var
            ),
            GenerationError::InvalidApiKey { provider, .. } => format!(
                "The {} API key is invalid. Please check your configuration.",
                provider
            ),
            GenerationError::Upstream { message, .. } => message.clone(),
            GenerationError::Transport(e) => {
                if e.is_timeout() {
                    "The model took too long to respond. Please try again.".to_string()
                } else {
                    "Failed to generate requirements. Please try again.".to_string()
                }
            }
            GenerationError::MalformedResponse(msg) => msg.clone(),
            GenerationError::Prompt(_) => {
                "Failed to generate requirements. Please try again.".to_string()
            }
        }
    }
}
