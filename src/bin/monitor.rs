//! Tickcast Monitor
//!
//! Polls the market data source on a fixed cadence, refits a trend model per
//! instrument and writes the predictions to a spreadsheet and the console.
//! Runs until interrupted with Ctrl+C.

use dotenvy::dotenv;
use std::sync::Arc;
use tickcast::config::MonitorConfig;
use tickcast::core::{CycleProcessor, CycleScheduler};
use tickcast::export::{ConsolePrinter, CsvExporter};
use tickcast::logging;
use tickcast::services::market_data::MarketDataProvider;
use tickcast::services::yahoo::YahooMarketDataProvider;
use tokio::signal;
use tokio::sync::watch;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv().ok();

    logging::init_logging();

    let config = MonitorConfig::from_env();
    let env = tickcast::config::get_environment();
    info!("Starting Tickcast Monitor");
    info!(environment = %env, "Environment");
    info!(
        cadence_secs = config.cadence.as_secs_f64(),
        "Refreshing every {:.1} seconds",
        config.cadence.as_secs_f64()
    );
    info!(
        instruments = ?config.tickers(),
        "Monitoring: {}",
        config
            .instruments
            .iter()
            .map(|i| i.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );
    info!(path = %config.output_path.display(), "Saving results to {}", config.output_path.display());

    let provider: Arc<dyn MarketDataProvider + Send + Sync> =
        Arc::new(YahooMarketDataProvider::with_base_url(&config.data_source_url));

    let processor = CycleProcessor::from_config(provider, &config);
    let mut scheduler = CycleScheduler::from_config(processor, &config)
        .with_exporter(Box::new(CsvExporter::new(config.output_path.clone())))
        .with_exporter(Box::new(ConsolePrinter::new()));

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        match signal::ctrl_c().await {
            Ok(()) => info!("Interrupt received, finishing current cycle..."),
            Err(e) => error!(error = %e, "Failed to listen for Ctrl+C, stopping"),
        }
        let _ = shutdown_tx.send(true);
    });

    info!("Press Ctrl+C to stop");
    let cycles = scheduler.run(shutdown_rx).await;
    info!(cycles = cycles, "Monitoring stopped");

    Ok(())
}
