use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::net::TcpListener;
use tracing::{info, warn};
use unisocial_core::secret::SecretService;
use unisocial_infrastructure::{ConfigService, SecretServiceImpl};
use unisocial_server::{AppState, build_router, telemetry};

/// UniSocial role-play proxy server
#[derive(Parser, Debug)]
#[command(name = "unisocial-server", version, about)]
struct Args {
    /// Path to config.toml (defaults to ~/.config/unisocial/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Listen address, overriding `server.bind`
    #[arg(long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let _log_guard = telemetry::init_tracing();

    let config_service = ConfigService::resolve(args.config.as_deref())?;
    let config = config_service
        .load()
        .with_context(|| format!("loading {}", config_service.path().display()))?;

    let secret_service = Arc::new(SecretServiceImpl::from_config(&config));
    let credential_configured = secret_service.credential_configured();
    if !credential_configured {
        warn!("GEMINI_API_KEY is not set; orchestration requests will fail with a configuration error");
    }
    info!(
        primary = %config.models.primary,
        fallback = %config.models.fallback,
        credential_configured,
        "configuration loaded"
    );

    let state = Arc::new(AppState::from_config(&config, secret_service));
    let app = build_router(state, config.server.body_limit_bytes);

    let bind = args.bind.unwrap_or_else(|| config.server.bind.clone());
    let listener = TcpListener::bind(&bind)
        .await
        .with_context(|| format!("binding {bind}"))?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
