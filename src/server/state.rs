//! Server application state shared across handlers

use crate::generation::LlmClient;
use crate::shutdown::ShutdownState;
use std::sync::Arc;

/// Shared state for the server. Read-only after startup.
#[derive(Clone)]
pub struct ServerAppState {
    /// Client for the configured LLM provider
    pub client: Arc<LlmClient>,

    /// Shutdown state
    pub shutdown_state: ShutdownState,
}

impl ServerAppState {
    pub fn new(client: LlmClient, shutdown_state: ShutdownState) -> Self {
        Self {
            client: Arc::new(client),
            shutdown_state,
        }
    }
}
