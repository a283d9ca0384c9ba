use anyhow::Result;
use tracing::info;

use nayi_raah::{config, server};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("nayi_raah=info".parse()?),
        )
        .init();

    info!("Starting Nayi Raah");

    // Load configuration from environment
    let config = config::Config::from_env()?;

    server::serve(config).await
}
