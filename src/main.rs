use clap::Parser;
use reqgen_lib::config::providers::{get_provider_preset, provider_ids};
use reqgen_lib::config::{secrets, GenerationConfig, SecretsConfig};
use reqgen_lib::generation::LlmClient;
use reqgen_lib::server::{self, ServerAppState};
use reqgen_lib::shutdown::{self, ShutdownState};
use std::time::Duration;

/// AI Requirement Generator - turns startup ideas into structured requirements
#[derive(Parser, Debug)]
#[command(name = "reqgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Port to bind the server to
    #[arg(long, env = "PORT", default_value = "5000")]
    port: u16,

    /// Address to bind the server to
    #[arg(long, default_value = "0.0.0.0")]
    bind: String,

    /// LLM provider to use (gemini, openai)
    #[arg(long, env = "REQGEN_PROVIDER", default_value = "gemini")]
    provider: String,

    /// Model name (defaults to the provider's default model)
    #[arg(long, env = "REQGEN_MODEL")]
    model: Option<String>,

    /// Override the provider's API base URL
    #[arg(long, env = "REQGEN_API_BASE")]
    api_base: Option<String>,

    /// Timeout for a single generation call, in seconds
    #[arg(long, env = "REQGEN_TIMEOUT_SECS", default_value_t = reqgen_lib::config::DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,

    /// Allowed CORS origins (repeatable); any origin when omitted
    #[arg(long = "cors-origin", env = "REQGEN_CORS_ORIGINS", value_delimiter = ',')]
    cors_origins: Vec<String>,

    /// Save this API key for --provider to ~/.reqgen/secrets.toml and exit
    #[arg(long, value_name = "KEY")]
    save_api_key: Option<String>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    if let Some(key) = cli.save_api_key.as_deref() {
        if let Err(e) = save_api_key(&cli.provider, key) {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
        return;
    }

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Failed to create tokio runtime: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = rt.block_on(run(cli)) {
        eprintln!("Server error: {:#}", e);
        std::process::exit(1);
    }
}

fn save_api_key(provider: &str, key: &str) -> anyhow::Result<()> {
    let preset = get_provider_preset(provider).ok_or_else(|| {
        anyhow::anyhow!(
            "Unknown provider '{}'. Known providers: {}",
            provider,
            provider_ids()
        )
    })?;
    let path = SecretsConfig::get_secrets_path()
        .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?;

    secrets::store_api_key(&path, preset, key)?;
    println!("Saved {} API key to {}", preset.name, path.display());
    Ok(())
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let shutdown_state = ShutdownState::new();
    if let Err(e) = shutdown::register_signal_handlers(shutdown_state.clone()) {
        log::warn!("Failed to register signal handlers: {}", e);
    }

    // A broken secrets file should not stop the server; env vars still work
    let secrets_config = SecretsConfig::load().unwrap_or_else(|e| {
        log::warn!("Ignoring secrets file: {}", e);
        SecretsConfig::default()
    });

    let mut config = GenerationConfig::for_provider(&cli.provider, cli.model, cli.api_base, None)?
        .with_timeout(Duration::from_secs(cli.timeout_secs));
    config.api_key = secrets::resolve_api_key_from_env(config.provider, &secrets_config);

    if config.api_key.is_none() {
        log::warn!(
            "{} is not set; generation requests will fail until it is configured",
            config.provider.api_key_env
        );
    }

    let client = LlmClient::new(config)?;
    let state = ServerAppState::new(client, shutdown_state.clone());

    let cors_origins = if cli.cors_origins.is_empty() {
        None
    } else {
        Some(cli.cors_origins)
    };

    server::run_server(cli.port, &cli.bind, state, cors_origins).await?;
    log::info!("Server stopped");
    Ok(())
}
