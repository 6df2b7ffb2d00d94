use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use stockwatch_core::{ReqwestHttpClient, YahooAdapter};
use stockwatch_web::{router, AppConfig, AppState};
use tracing::info;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Debug, Parser)]
#[command(name = "stockwatch", about = "Stock quote, favorites and watchlist HTTP service", version)]
struct Cli {
    /// Address to listen on; overrides `server.bind`.
    #[arg(long, env = "STOCKWATCH_BIND")]
    bind: Option<String>,

    /// Directory holding default.toml / local.toml.
    #[arg(long, default_value = "config")]
    config_dir: PathBuf,

    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "stockwatch_web=info,stockwatch_core=info,tower_http=info,warn",
        1 => "stockwatch_web=debug,stockwatch_core=debug,tower_http=debug,info",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();

    let config = AppConfig::load(&cli.config_dir)?;
    let bind = cli.bind.unwrap_or_else(|| config.server.bind.clone());

    let http_client = Arc::new(ReqwestHttpClient::new(&config.provider.user_agent));
    let provider = Arc::new(YahooAdapter::new(http_client, config.yahoo()));
    let state = AppState::new(provider, config.watchlist()?);

    let listener = tokio::net::TcpListener::bind(&bind)
        .await
        .with_context(|| format!("failed to bind {bind}"))?;
    info!(
        "listening on {} (watchlist: {} symbols)",
        listener.local_addr()?,
        state.watchlist.symbols().len()
    );

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("ctrl-c received, draining connections");
    }
}
