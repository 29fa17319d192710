//! Wallet service daemon, the entry point for serving the HTTP API.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use lumen_horizon::HorizonClient;
use lumen_rpc::RpcServer;
use lumen_wallet::{ServiceConfig, WalletService};
use tracing::info;

use crate::settings::{FileConfig, Settings};

mod settings;

#[derive(Parser)]
#[command(name = "lumen-daemon", about = "Wallet service over a Stellar-style ledger node")]
struct Cli {
    /// Network to run against: "public" or "testnet".
    /// When a config file is provided, defaults to the file's network value.
    #[arg(long, env = "LUMEN_NETWORK")]
    network: Option<String>,

    /// Master account key. Creating and funding wallets needs the full
    /// secret key ("S..."), not the public address.
    #[arg(long, env = "LUMEN_MASTER_KEY", hide_env_values = true)]
    master_key: Option<String>,

    /// Code of the asset every new wallet trusts and receives (default: USDC).
    #[arg(long, env = "LUMEN_ASSET_CODE")]
    asset_code: Option<String>,

    /// Issuer address of the designated asset.
    #[arg(long, env = "LUMEN_ASSET_ISSUER")]
    asset_issuer: Option<String>,

    /// Ledger node endpoint (defaults to the network's public node).
    #[arg(long, env = "LUMEN_HORIZON_URL")]
    horizon_url: Option<String>,

    /// Port for the HTTP API (default: 8080).
    #[arg(long, env = "LUMEN_LISTEN_PORT")]
    listen_port: Option<u16>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "LUMEN_LOG_LEVEL")]
    log_level: Option<String>,

    /// Path to a TOML configuration file. If provided, file settings
    /// are used as the base; CLI flags and env vars override them.
    #[arg(long)]
    config: Option<PathBuf>,
}

/// `RUST_LOG` wins when set; the configured level is the fallback.
fn init_tracing(level: &str) {
    use tracing_subscriber::EnvFilter;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone();
    let file = match &config_path {
        Some(path) => FileConfig::from_toml_file(path)?,
        None => FileConfig::default(),
    };

    let settings = Settings::resolve(cli, file)?;
    init_tracing(&settings.log_level);
    if let Some(path) = config_path {
        info!("loaded config from {}", path.display());
    }

    let client =
        HorizonClient::new(&settings.node_url).context("failed to build the node client")?;
    let service = WalletService::new(
        client,
        ServiceConfig::new(settings.network, settings.master, settings.asset),
    )
    .context("invalid service configuration")?;

    info!(
        "starting wallet service on the {} network (API port {}, node {})",
        settings.network.as_str(),
        settings.listen_port,
        settings.node_url
    );
    let server = RpcServer::new(settings.listen_port, Arc::new(service));
    server.start().await.context("API server failed")?;
    Ok(())
}
