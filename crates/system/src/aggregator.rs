use crate::normalize::{bytes_to_gb, Normalizer};
use crate::source::{GpuTelemetry, HostTelemetry};
use chrono::{DateTime, Local};
use std::collections::BTreeMap;
use std::time::Instant;
use telemon_core::{CoreLoads, MetricDomain, MetricsFrame, Series};
use tracing::trace;

/// Owns every series and drives one sampling pass per tick.
///
/// An unavailable reading never stops the pass: the affected domain records
/// a zero sample and every other domain is sampled as usual.
pub struct Aggregator {
    host:       Box<dyn HostTelemetry>,
    gpu:        Box<dyn GpuTelemetry>,
    normalizer: Normalizer,
    series:     BTreeMap<MetricDomain, Series>,
    per_core:   CoreLoads,
    tick:       u64,
    sampled_at: DateTime<Local>,
}

impl Aggregator {
    /// Create zero-filled windows of `window_size` samples for every
    /// windowed domain and one per-core slot per host core.
    pub fn new(
        host: Box<dyn HostTelemetry>,
        gpu: Box<dyn GpuTelemetry>,
        window_size: usize,
    ) -> Self {
        let series = MetricDomain::WINDOWED
            .into_iter()
            .map(|domain| (domain, Series::new(window_size)))
            .collect();
        let per_core = CoreLoads::new(host.core_count());

        Self {
            host,
            gpu,
            normalizer: Normalizer::new(),
            series,
            per_core,
            tick: 0,
            sampled_at: Local::now(),
        }
    }

    /// Run one sampling pass now.
    pub fn sample(&mut self) {
        self.sample_at(Instant::now());
    }

    /// Run one sampling pass, timing counter rates against `now`.
    pub fn sample_at(&mut self, now: Instant) {
        self.sampled_at = Local::now();
        self.host.refresh();

        // ── CPU ──────────────────────────────────────────────────────────────
        let usage = self.host.cpu_usage().map(f64::from);
        self.record(MetricDomain::CpuUsage, usage);

        let temperature = self.host.cpu_temperature().map(f64::from);
        self.record(MetricDomain::CpuTemperature, temperature);

        let frequency = self.host.cpu_frequency().map(|mhz| mhz as f64);
        self.record(MetricDomain::CpuFrequency, frequency);

        match self.host.per_core_usage() {
            Some(loads) => self.per_core.overwrite(loads.into_iter().map(f64::from)),
            None => {
                trace!(domain = %MetricDomain::PerCoreUsage, "reading unavailable; recording 0");
                self.per_core.clear();
            }
        }

        // ── Memory ───────────────────────────────────────────────────────────
        let memory = self.host.memory_used().map(bytes_to_gb);
        self.record(MetricDomain::MemoryUsed, memory);

        // ── Disk ─────────────────────────────────────────────────────────────
        let (read, write) = match self.host.disk_counters() {
            Some(counters) => {
                let (read, write) = self.normalizer.disk(&counters, now);
                (Some(read), Some(write))
            }
            None => (None, None),
        };
        self.record(MetricDomain::DiskReadRate, read);
        self.record(MetricDomain::DiskWriteRate, write);

        // ── Network ──────────────────────────────────────────────────────────
        let (down, up) = match self.host.net_counters() {
            Some(counters) => {
                let (down, up) = self.normalizer.network(&counters, now);
                (Some(down), Some(up))
            }
            None => (None, None),
        };
        self.record(MetricDomain::NetDownloadRate, down);
        self.record(MetricDomain::NetUploadRate, up);

        // ── GPU ──────────────────────────────────────────────────────────────
        let gpu_usage = self.gpu.utilization().map(f64::from);
        self.record(MetricDomain::GpuUsage, gpu_usage);

        let gpu_temperature = self.gpu.temperature().map(f64::from);
        self.record(MetricDomain::GpuTemperature, gpu_temperature);

        let gpu_frequency = self.gpu.frequency().map(f64::from);
        self.record(MetricDomain::GpuFrequency, gpu_frequency);

        self.tick += 1;
    }

    fn record(&mut self, domain: MetricDomain, value: Option<f64>) {
        let value = value.unwrap_or_else(|| {
            trace!(%domain, "reading unavailable; recording 0");
            0.0
        });
        if let Some(series) = self.series.get_mut(&domain) {
            series.push(value);
        }
    }

    /// Window of `domain`, oldest first; empty for per-core usage.
    pub fn snapshot(&self, domain: MetricDomain) -> Vec<f64> {
        self.series.get(&domain).map(Series::snapshot).unwrap_or_default()
    }

    pub fn series(&self, domain: MetricDomain) -> Option<&Series> {
        self.series.get(&domain)
    }

    /// Per-core usage from the last pass, indexed by core id.
    pub fn per_core(&self) -> &[f64] {
        self.per_core.as_slice()
    }

    /// Number of completed passes.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Consistent copy of every window and the per-core snapshot.
    pub fn frame(&self) -> MetricsFrame {
        MetricsFrame {
            tick:       self.tick,
            sampled_at: self.sampled_at,
            windows:    self
                .series
                .iter()
                .map(|(domain, series)| (*domain, series.snapshot()))
                .collect(),
            per_core:   self.per_core.as_slice().to_vec(),
        }
    }
}

impl std::fmt::Debug for Aggregator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Aggregator")
            .field("tick", &self.tick)
            .field("cores", &self.per_core.core_count())
            .field("sampled_at", &self.sampled_at)
            .finish_non_exhaustive()
    }
}
