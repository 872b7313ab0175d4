//! Recollectable server
//!
//! Serves the collectibles catalogue from the in-memory store.

use clap::Parser;
use recollectable_persistence::backends::memory::InMemoryBackend;
use recollectable_rest::{ServerConfig, create_app_with_config, init_logging};
use tracing::info;

/// Creates the in-memory backend, seeded when configured.
fn create_backend(config: &ServerConfig) -> anyhow::Result<InMemoryBackend> {
    if config.seed_sample_data {
        info!("Seeding sample catalogue");
        Ok(InMemoryBackend::with_sample_data()?)
    } else {
        Ok(InMemoryBackend::new())
    }
}

/// Starts the Axum HTTP server.
async fn serve(app: axum::Router, config: &ServerConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr();
    info!(address = %addr, "Server listening");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    init_logging(&config.log_level);

    if let Err(errors) = config.validate() {
        for error in &errors {
            eprintln!("Configuration error: {}", error);
        }
        std::process::exit(1);
    }

    info!(
        port = config.port,
        host = %config.host,
        base_url = %config.base_url,
        "Starting Recollectable server"
    );

    let backend = create_backend(&config)?;
    let app = create_app_with_config(backend, config.clone());
    serve(app, &config).await
}
