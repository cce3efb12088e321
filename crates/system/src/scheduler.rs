use crate::aggregator::Aggregator;
use std::time::{Duration, Instant};
use telemon_core::{MetricsFrame, Result, TelemonError};
use tokio::sync::{oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time;
use tracing::{debug, info};

/// Handle to the background sampling task.
///
/// Dropping the handle stops the task after its current pass.
pub struct MonitorHandle {
    frames: watch::Receiver<MetricsFrame>,
    stop:   Option<oneshot::Sender<()>>,
    task:   JoinHandle<Aggregator>,
}

impl MonitorHandle {
    /// A receiver that is notified after every completed pass.
    pub fn frames(&self) -> watch::Receiver<MetricsFrame> {
        self.frames.clone()
    }

    /// Copy of the most recently published frame.
    pub fn latest(&self) -> MetricsFrame {
        self.frames.borrow().clone()
    }

    /// Stop sampling and wait for the in-flight pass to finish.
    ///
    /// Returns the aggregator with every window as of the last pass.
    pub async fn shutdown(mut self) -> Result<Aggregator> {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
        self.task
            .await
            .map_err(|e| TelemonError::Scheduler(format!("monitor task failed: {e}")))
    }
}

/// Spawn a background Tokio task that runs a sampling pass, publishes the
/// resulting [`MetricsFrame`], then waits `interval` before the next pass.
///
/// The delay is measured from the end of a pass, so passes never overlap and
/// a slow pass pushes the next one back instead of being made up for.
pub fn spawn_monitor(mut aggregator: Aggregator, interval: Duration) -> MonitorHandle {
    let (tx, rx) = watch::channel(aggregator.frame());
    let (stop_tx, mut stop_rx) = oneshot::channel::<()>();

    let task = tokio::spawn(async move {
        info!("sampling every {interval:?}");

        loop {
            let started = Instant::now();
            aggregator.sample();
            let took = started.elapsed();
            if took > interval {
                debug!(tick = aggregator.tick(), "pass took {took:?}, longer than the tick interval");
            }

            if tx.send(aggregator.frame()).is_err() {
                break; // all receivers dropped
            }

            if !wait_for_next_tick(interval, &mut stop_rx).await {
                break;
            }
        }

        info!(ticks = aggregator.tick(), "sampling stopped");
        aggregator
    });

    MonitorHandle {
        frames: rx,
        stop: Some(stop_tx),
        task,
    }
}

/// Sleep for `interval`; `false` if a stop arrived first.
///
/// A pending stop wins even when the sleep has already elapsed.
async fn wait_for_next_tick(interval: Duration, stop: &mut oneshot::Receiver<()>) -> bool {
    tokio::select! {
        biased;
        // Fires on an explicit stop or when the handle is dropped.
        _ = stop => false,
        _ = time::sleep(interval) => true,
    }
}
