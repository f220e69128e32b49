use std::time::{Duration, Instant};

use chrono::Utc;
use futures::future::try_join3;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use crate::metrics::prometheus::{record_refresh_failure, record_refresh_success};
use crate::state::snapshot::MarketSnapshot;

use super::source::MarketDataSource;
use super::types::Category;

/// Owns the poll loop spawned by [`spawn`].
///
/// `shutdown` stops future ticks and drops any in-flight cycle, so nothing
/// is published after teardown.
pub struct RefresherHandle {
    shutdown_tx: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl RefresherHandle {
    pub async fn shutdown(self) {
        // If the loop already exited the send just fails and the join
        // returns immediately.
        let _ = self.shutdown_tx.send(true);
        if let Err(err) = self.task.await {
            warn!(error = %err, "refresher task panicked");
        }
    }
}

/// Start the refresh loop: one cycle immediately, then one per interval.
pub fn spawn<S>(
    source: S,
    snapshot_tx: watch::Sender<MarketSnapshot>,
    every: Duration,
) -> RefresherHandle
where
    S: MarketDataSource + 'static,
{
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let task = tokio::spawn(run(source, snapshot_tx, every, shutdown_rx));

    RefresherHandle { shutdown_tx, task }
}

async fn run<S>(
    source: S,
    snapshot_tx: watch::Sender<MarketSnapshot>,
    every: Duration,
    mut shutdown_rx: watch::Receiver<bool>,
) where
    S: MarketDataSource,
{
    info!(interval_secs = every.as_secs(), "refresher started");

    let mut ticker = tokio::time::interval(every);
    // A cycle that outlasts the interval delays the next tick instead of
    // bursting to catch up.
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        let cycle = async {
            ticker.tick().await;
            refresh_once(&source, &snapshot_tx).await;
        };

        tokio::select! {
            _ = shutdown_rx.changed() => {
                info!("refresher shutting down");
                break;
            }
            () = cycle => {}
        }
    }
}

/// One complete refresh cycle: publish the in-flight transition, fetch all
/// three categories concurrently, publish exactly one outcome.
pub async fn refresh_once<S>(source: &S, snapshot_tx: &watch::Sender<MarketSnapshot>)
where
    S: MarketDataSource,
{
    let started = Instant::now();
    snapshot_tx.send_modify(|snapshot| *snapshot = snapshot.begin_refresh());

    // Fail-fast join: the first error resolves the join and the remaining
    // in-flight fetches are dropped, so partial results are never applied.
    let fetched = try_join3(
        source.fetch(Category::Gold),
        source.fetch(Category::Currency),
        source.fetch(Category::Cryptocurrency),
    )
    .await;

    match fetched {
        Ok((gold, currency, cryptocurrency)) => {
            debug!(
                gold = gold.len(),
                currency = currency.len(),
                cryptocurrency = cryptocurrency.len(),
                cycle_ms = started.elapsed().as_millis() as u64,
                "refresh cycle succeeded"
            );
            record_refresh_success(started.elapsed().as_millis() as f64);

            snapshot_tx.send_modify(|snapshot| {
                *snapshot = snapshot.apply_success(gold, currency, cryptocurrency, Utc::now());
            });
        }
        Err(err) => {
            warn!(category = ?err.category(), error = %err, "refresh cycle failed");
            record_refresh_failure(err.category().path());

            snapshot_tx.send_modify(|snapshot| *snapshot = snapshot.apply_failure());
        }
    }
}
