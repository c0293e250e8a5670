use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use employee_registry::api::{AppState, create_app};
use employee_registry::config::{ConfigLoader, RegistryConfig};
use employee_registry::store::open_store;

/// Employee record store and salary reporting service.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Path to the YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Interface to bind, overriding the configuration file
    #[arg(long)]
    host: Option<String>,

    /// Port to bind, overriding the configuration file
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => ConfigLoader::load(path)?.into_config(),
        None => RegistryConfig::default(),
    };
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    let addr: SocketAddr = config.server.socket_addr().ok_or_else(|| {
        format!(
            "invalid listen address {}:{}",
            config.server.host, config.server.port
        )
    })?;

    let store = open_store(&config.storage)?;
    let app = create_app(AppState::new(store), &config.cors);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(address = %addr, "Employee registry listening");

    if let Err(e) = axum::serve(listener, app).await {
        error!(error = %e, "Server error");
        return Err(e.into());
    }

    Ok(())
}
