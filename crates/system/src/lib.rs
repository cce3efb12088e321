//! Host and GPU telemetry sampling.
//!
//! Adapters pull raw readings, the [`Normalizer`] turns them into display
//! units, the [`Aggregator`] keeps one window per metric, and
//! [`spawn_monitor`] drives passes on a background Tokio task.

pub mod aggregator;
pub mod cpu;
pub mod disk;
pub mod gpu;
pub mod host;
pub mod memory;
pub mod network;
pub mod normalize;
pub mod scheduler;
pub mod source;

#[cfg(test)]
mod testing;

pub use aggregator::Aggregator;
pub use gpu::{NoGpu, NvmlGpu};
pub use host::HostProbe;
pub use normalize::{CounterRate, DeviceRates, Normalizer};
pub use scheduler::{spawn_monitor, MonitorHandle};
pub use source::{DiskCounters, GpuTelemetry, HostTelemetry, NetCounters, PerDevice};
