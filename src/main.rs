mod config;
mod market_data;
mod metrics;
mod state;
mod view;

use anyhow::Result;
use tokio::sync::watch;
use tracing::{info, warn};

use config::Config;
use market_data::http::HttpMarketDataSource;
use market_data::refresher;
use state::snapshot::MarketSnapshot;

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = Config::from_env()?;
    config.validate()?;

    if config.metrics_port != 0 {
        metrics::prometheus::init_metrics_server(config.metrics_port);
    }

    info!(
        base_url = %config.api_base_url,
        interval_secs = config.poll_interval.as_secs(),
        locale = config.locale.tag,
        "golden-price starting"
    );

    let (snapshot_tx, snapshot_rx) = watch::channel(MarketSnapshot::new());

    let source = HttpMarketDataSource::new(&config)?;
    let refresher = refresher::spawn(source, snapshot_tx, config.poll_interval);

    let renderer = tokio::spawn(view::run_renderer(snapshot_rx, config.locale));

    tokio::select! {
        res = renderer => {
            match res {
                Ok(()) => warn!("renderer task exited"),
                Err(err) => warn!(error = %err, "renderer task panicked"),
            }
        }
        _ = tokio::signal::ctrl_c() => {
            info!("received Ctrl-C, shutting down");
        }
    }

    refresher.shutdown().await;

    Ok(())
}
