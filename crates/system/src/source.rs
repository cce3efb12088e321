//! Pull-based telemetry sources.
//!
//! Every read returns `None` when the value is unavailable this tick; the
//! aggregator turns that into a zero sample for that domain only.

use std::collections::BTreeMap;

/// Counters keyed by device or interface name, one entry per name.
pub type PerDevice<C> = BTreeMap<String, C>;

/// Cumulative I/O of one disk since boot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiskCounters {
    pub read_bytes:    u64,
    pub written_bytes: u64,
}

/// Cumulative traffic of one network interface since boot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NetCounters {
    pub received_bytes: u64,
    pub sent_bytes:     u64,
}

/// CPU, memory, disk and network readings from the host OS.
pub trait HostTelemetry: Send {
    /// Pull fresh values from the OS. Called once at the start of every pass.
    fn refresh(&mut self);

    /// Number of logical cores; fixed for the lifetime of the source.
    fn core_count(&self) -> usize;

    /// Global CPU utilisation in percent `[0, 100]`.
    fn cpu_usage(&self) -> Option<f32>;

    /// Current clock speed in MHz.
    fn cpu_frequency(&self) -> Option<u64>;

    /// CPU package temperature in °C from the designated sensor.
    fn cpu_temperature(&self) -> Option<f32>;

    /// Per-core utilisation in percent, ordered by core index.
    fn per_core_usage(&self) -> Option<Vec<f32>>;

    /// System-wide used memory in bytes.
    fn memory_used(&self) -> Option<u64>;

    /// Per-disk counters; each physical device appears once.
    fn disk_counters(&self) -> Option<PerDevice<DiskCounters>>;

    /// Per-interface counters.
    fn net_counters(&self) -> Option<PerDevice<NetCounters>>;
}

/// Readings from the single pre-selected GPU.
pub trait GpuTelemetry: Send {
    /// Utilisation in percent.
    fn utilization(&self) -> Option<u32>;
    /// Core temperature in °C.
    fn temperature(&self) -> Option<u32>;
    /// Graphics clock in MHz.
    fn frequency(&self) -> Option<u32>;
}
