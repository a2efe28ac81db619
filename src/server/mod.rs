//! HTTP server for the requirement generator
//!
//! Exposes the generation pipeline to the browser frontend as a small JSON API.

pub mod routes;
pub mod state;

pub use state::ServerAppState;

use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

/// Build the CORS layer: any origin unless a list is given
pub fn build_cors_layer(cors_origins: Option<&[String]>) -> CorsLayer {
    let methods = [Method::GET, Method::POST, Method::OPTIONS];

    match cors_origins {
        Some(origins) if !origins.is_empty() => {
            // Restricted CORS: only allow specified origins
            let allowed_origins: Vec<HeaderValue> =
                origins.iter().filter_map(|o| o.parse().ok()).collect();
            CorsLayer::new()
                .allow_origin(allowed_origins)
                .allow_methods(methods)
                .allow_headers([CONTENT_TYPE])
        }
        _ => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(methods)
            .allow_headers([CONTENT_TYPE]),
    }
}

/// Build the application router
///
/// `/generate` is kept alongside `/api/generate` for frontends that talk to
/// the standalone backend directly.
pub fn build_router(state: ServerAppState, cors_origins: Option<&[String]>) -> Router {
    let generate = post(routes::generate_handler).fallback(routes::method_not_allowed);

    Router::new()
        .route("/api/generate", generate.clone())
        .route("/generate", generate)
        .route("/api", get(routes::api_status_handler))
        .route("/api/version", get(routes::version_handler))
        .route("/health", get(routes::health_handler))
        .layer(build_cors_layer(cors_origins))
        .with_state(state)
}

/// Run the HTTP server until shutdown is requested
pub async fn run_server(
    port: u16,
    bind: &str,
    state: ServerAppState,
    cors_origins: Option<Vec<String>>,
) -> anyhow::Result<()> {
    let addr: SocketAddr = format!("{}:{}", bind, port)
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid address {}:{}: {}", bind, port, e))?;

    let cors_display = match &cors_origins {
        Some(origins) if !origins.is_empty() => origins.join(", "),
        _ => "*".to_string(),
    };
    let config = state.client.config();
    let key_status = if config.api_key.is_some() {
        "configured"
    } else {
        "MISSING"
    };

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║               AI Requirement Generator Server                ║");
    println!("╠══════════════════════════════════════════════════════════════╣");
    println!("║  Server URL: http://{:<41}║", addr);
    println!("║  Provider:   {:<48}║", format!("{} ({})", config.provider.name, config.model));
    println!("║  API key:    {:<48}║", key_status);
    println!("║  CORS:       {:<48}║", cors_display);
    println!("║                                                              ║");
    println!("║  Endpoints:                                                  ║");
    println!("║    POST /api/generate   - Generate requirements              ║");
    println!("║    GET  /api            - API status                         ║");
    println!("║    GET  /api/version    - Server version info                ║");
    println!("║    GET  /health         - Health check                       ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    let app = build_router(state.clone(), cors_origins.as_deref());

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to {}: {}", addr, e))?;

    log::info!("Server listening on http://{}", addr);

    // Create shutdown signal that waits for the shutdown state flag
    let shutdown_state = state.shutdown_state.clone();
    let shutdown_signal = async move {
        loop {
            if shutdown_state.is_shutdown_requested() {
                log::info!("Shutdown signal received, stopping server...");
                break;
            }
            tokio::time::sleep(std::time::Duration::from_millis(100)).await;
        }
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))
}
