use anyhow::Result;
use tracing::info;

use mk_events_api::{app, config, middleware};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Load configuration
    let config = config::Config::load()?;

    // Initialize logging
    middleware::logging::init_logging(&config.logging)?;

    info!("Starting MK Events API v{}", env!("CARGO_PKG_VERSION"));

    middleware::init_metrics()?;

    // Open the key-value storage every collection is persisted to
    let settings = config.storage_settings()?;
    let storage = persistence::open_storage(&settings)?;
    info!(
        backend = %config.storage.backend,
        data_dir = %config.storage.data_dir,
        "Storage opened"
    );

    let addr = config.socket_addr()?;

    // Build application
    let app = app::create_app(config, storage);

    // Start server
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
