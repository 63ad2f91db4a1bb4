use clap::Parser;
use dotenvy::dotenv;

mod api;
mod config;
mod setup;

use config::{
    app_config::AppConfig,
    cli::{Cli, Command},
};
use setup::{dependency_injection::DependencyContainer, server::Server};

/// Cart service entry point
///
/// - config/: CLI and environment configuration, backend selection
/// - setup/: Dependency injection and server setup
/// - api/: Route handlers, DTOs and error mapping
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 3. Load configuration
    let Command::Start(args) = Cli::parse().command;
    tracing::info!(pid = std::process::id(), "Starting cart service");
    let config = AppConfig::from_args(args)?;

    // 4. Build and initialize the cart store, wire dependencies
    let container = DependencyContainer::new(&config.store).await?;

    // 5. Run server
    Server::run(config, container).await?;

    Ok(())
}
