//! Request handlers for the generation API

use super::ServerAppState;
use crate::generation::{self, GenerationError};
use crate::models::{GenerationRequest, GenerationResult};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Success body for the generate endpoints
#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub success: bool,
    pub data: GenerationResult,
}

/// Error body shared by all endpoints
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

/// Error type for handlers
pub struct ApiError {
    status: StatusCode,
    error: String,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status,
            error: error.into(),
            message: message.into(),
        }
    }
}

impl From<GenerationError> for ApiError {
    fn from(err: GenerationError) -> Self {
        let status = if err.is_client_error() {
            StatusCode::BAD_REQUEST
        } else if err.is_auth_error() {
            StatusCode::UNAUTHORIZED
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };
        Self::new(status, err.title(), err.user_message())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            "Invalid request",
            rejection.body_text(),
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.error,
            message: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

/// Generate requirements for a startup idea
pub async fn generate_handler(
    State(state): State<ServerAppState>,
    payload: Result<Json<GenerationRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let Json(request) = payload?;

    match generation::generate_requirements(&state.client, request.idea.as_deref()).await {
        Ok(data) => Ok(Json(GenerateResponse {
            success: true,
            data,
        })),
        Err(e) => {
            if e.is_client_error() {
                log::debug!("Rejected generation request: {}", e);
            } else {
                log::error!("Error generating requirements: {}", e);
            }
            Err(e.into())
        }
    }
}

/// Any method other than POST on a generate route
pub async fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(serde_json::json!({ "error": "Method not allowed" })),
    )
        .into_response()
}

/// API status endpoint
pub async fn api_status_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "message": "AI Requirement Generator API is running",
    }))
}

/// Version information for the server
#[derive(Debug, Serialize)]
pub struct VersionInfo {
    pub version: String,
    pub provider: String,
    pub model: String,
}

/// Version endpoint - returns server version and active provider
pub async fn version_handler(State(state): State<ServerAppState>) -> Json<VersionInfo> {
    let config = state.client.config();
    Json(VersionInfo {
        version: env!("CARGO_PKG_VERSION").to_string(),
        provider: config.provider.id.to_string(),
        model: config.model.clone(),
    })
}

/// Health check endpoint
pub async fn health_handler() -> &'static str {
    "OK"
}
