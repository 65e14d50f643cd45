// Catalog sync tool
//
// Fetches the device list from the upstream catalog API and writes it
// to CATALOG_PATH in the format the web server loads.
//
// Environment:
// - API_URL: upstream endpoint (required)
// - API_KEY: bearer token (optional)
// - CATALOG_PATH: output file (default: devices.json)

use anyhow::{Context, Result};
use device_catalog::sync::{sync_catalog, SyncConfig};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async_main())
}

async fn async_main() -> Result<()> {
    let config = SyncConfig::from_env().context("invalid sync configuration")?;
    tracing::info!(
        "Syncing {} into {}",
        config.api_url,
        config.output_path.display()
    );

    let written = sync_catalog(&config)
        .await
        .with_context(|| format!("sync from {} failed", config.api_url))?;

    println!("✓ Wrote {} devices to {}", written, config.output_path.display());
    Ok(())
}
