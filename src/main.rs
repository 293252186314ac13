//! Polymarket "Bitcoin Up or Down" observer entry point.

use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use polymarket_observer::config::Config;
use polymarket_observer::events::JsonlSink;
use polymarket_observer::market::PolymarketClient;
use polymarket_observer::observer::Observer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        e
    })?;

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.rust_log.clone()));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    // Validate configuration
    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        return Err(anyhow::anyhow!("Configuration validation failed: {}", e));
    }

    info!("Configuration loaded successfully");
    info!(
        "Market filter: \"{}\" + \"{}\" ({})",
        config.title_keyword_primary, config.title_keyword_secondary, config.timeframe_label
    );
    info!("Poll interval: {}s", config.poll_interval_secs);
    info!("Spread threshold: {}", config.spread_threshold);
    info!("Event log: {}", config.events_log_path.display());

    let client = PolymarketClient::new(&config);
    let sink = JsonlSink::new(&config.events_log_path);

    let mut observer = Observer::new(client, sink, config);
    observer.run().await?;

    Ok(())
}
