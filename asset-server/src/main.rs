use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use asset_server::config::{Config, StoreBackend};
use asset_server::{telemetry, AssetStore, DocumentStore, MemoryStore};
use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;

#[derive(Parser)]
#[command(name = "asset-server", version, about = "CRUD HTTP service for assets")]
struct Cli {
    /// Path to TOML config file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listen address (e.g. "127.0.0.1:9990").
    #[arg(short, long, env = "ASSET_LISTEN_ADDR")]
    listen: Option<String>,

    /// Keep assets in memory instead of the document store.
    #[arg(short, long)]
    memory: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = Config::load(cli.config.as_deref()).context("loading config")?;
    if let Some(addr) = cli.listen {
        config.server.listen_addr = addr;
    }
    if cli.memory {
        config.store.backend = StoreBackend::Memory;
    }

    telemetry::init(&config.log.level);

    let store: Arc<dyn AssetStore> = match config.store.backend {
        StoreBackend::Document => Arc::new(
            DocumentStore::open(&config.store.path, &config.store.collection)
                .context("opening document store")?,
        ),
        StoreBackend::Memory => Arc::new(MemoryStore::new()),
    };

    let listener = TcpListener::bind(&config.server.listen_addr)
        .await
        .with_context(|| format!("binding {}", config.server.listen_addr))?;
    info!(addr = %listener.local_addr()?, backend = ?config.store.backend, "asset server listening");

    asset_server::run(listener, store).await?;
    Ok(())
}
