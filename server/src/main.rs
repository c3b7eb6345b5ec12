//! Customer Registry Server Entry Point

use anyhow::Context;
use clap::Parser;
use customer_registry_common::config::ServerConfig;
use customer_registry_server::cli::{Cli, Commands};
use customer_registry_server::{logging, server, AppState};
use tracing::info;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Err(e) = logging::init() {
        eprintln!("failed to initialize logging: {}", e);
    }

    info!("Customer Registry v{}", env!("CARGO_PKG_VERSION"));

    let config = ServerConfig::from_env().context("failed to load configuration")?;
    let config = match cli.command {
        Some(Commands::Serve(args)) => args.apply(config),
        None => config,
    };

    let bind_addr = config.bind_addr();
    let state = AppState::from_config(config);

    server::run(state)
        .await
        .with_context(|| format!("failed to serve on {}", bind_addr))
}
