//! telemon — host and GPU telemetry sampler.
//!
//! Run with:  `RUST_LOG=info telemon`
//!
//! Without a rendering front-end attached, every completed tick is logged.

use anyhow::Result;
use std::future::Future;
use telemon_core::{MetricDomain, MetricsFrame};
use telemon_system::{spawn_monitor, Aggregator, GpuTelemetry, HostProbe, NoGpu, NvmlGpu};
use tokio::sync::watch;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Structured logging — RUST_LOG controls verbosity (default: info).
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("telemon v{} starting", env!("CARGO_PKG_VERSION"));

    let config = telemon_config::load(telemon_config::default_path())?;

    let gpu: Box<dyn GpuTelemetry> = match NvmlGpu::init() {
        Ok(gpu) => Box::new(gpu),
        Err(e) => {
            tracing::warn!("{e}; GPU series will read 0");
            Box::new(NoGpu)
        }
    };

    let aggregator = Aggregator::new(
        Box::new(HostProbe::new()),
        gpu,
        config.sampling.window_size,
    );
    let monitor = spawn_monitor(aggregator, config.sampling.tick_interval());
    let interrupted = async {
        let _ = tokio::signal::ctrl_c().await;
        tracing::info!("interrupt received, shutting down");
    };
    log_frames_until(monitor.frames(), interrupted).await;

    monitor.shutdown().await?;
    Ok(())
}

/// Log every published frame until `shutdown` resolves or the sampler goes
/// away. Returns the number of frames logged.
async fn log_frames_until<F>(mut frames: watch::Receiver<MetricsFrame>, shutdown: F) -> u64
where
    F: Future<Output = ()>,
{
    tokio::pin!(shutdown);
    let mut logged = 0;

    loop {
        tokio::select! {
            biased;
            _ = &mut shutdown => break,
            changed = frames.changed() => {
                if changed.is_err() {
                    break;
                }
                log_frame(&frames.borrow_and_update());
                logged += 1;
            }
        }
    }
    logged
}

fn log_frame(frame: &MetricsFrame) {
    let line = MetricDomain::WINDOWED
        .iter()
        .map(|&d| format!("{}={:.1}{}", d.key(), frame.latest(d), d.unit()))
        .collect::<Vec<_>>()
        .join(" ");
    tracing::info!(tick = frame.tick, cores = ?frame.per_core, "{line}");
}
