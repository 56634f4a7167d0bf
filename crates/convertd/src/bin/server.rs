//! Conversion server binary
//!
//! Run with: cargo run -p convertd --bin convertd-server

use convertd::{server::ConvertServer, ConvertConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "convertd=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ConvertConfig::default();

    tracing::info!("Configuration loaded");
    tracing::info!("  - Upload dir: {}", config.storage.upload_dir.display());
    tracing::info!("  - Processed dir: {}", config.storage.processed_dir.display());
    tracing::info!("  - Processing delay: {}s", config.processing.delay_secs);

    let server = ConvertServer::new(config)?;

    println!("\nServer starting...");
    println!("  API: http://{}", server.address());
    println!("  Health: http://{}/health", server.address());
    println!("\nEndpoints:");
    println!("  POST /upload/    - Upload a CSV or JSON file");
    println!("  GET  /status/    - Poll task state (?task_id=<id>)");
    println!("  GET  /download/  - Download the processed JSON (?task_id=<id>)");
    println!("  GET  /tasks/     - List all tasks");
    println!("\nPress Ctrl+C to stop\n");

    server.start().await?;

    Ok(())
}
