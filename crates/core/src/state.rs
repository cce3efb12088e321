use crate::domain::MetricDomain;
use chrono::{DateTime, Local};
use std::collections::BTreeMap;

/// Everything the rendering layer needs after one completed tick.
///
/// Frames are immutable copies: the sampler builds one after a pass finishes
/// and readers never observe a half-updated tick.
#[derive(Debug, Clone)]
pub struct MetricsFrame {
    /// Number of completed sampling passes (0 = nothing sampled yet).
    pub tick: u64,
    /// Wall-clock time at which the pass started.
    pub sampled_at: DateTime<Local>,
    /// Window contents per windowed domain, oldest first.
    pub windows: BTreeMap<MetricDomain, Vec<f64>>,
    /// Per-core CPU usage, indexed by core id.
    pub per_core: Vec<f64>,
}

impl MetricsFrame {
    /// Window for `domain`; empty for [`MetricDomain::PerCoreUsage`].
    pub fn window(&self, domain: MetricDomain) -> &[f64] {
        self.windows.get(&domain).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Newest sample of `domain` (zero if none).
    #[must_use]
    pub fn latest(&self, domain: MetricDomain) -> f64 {
        self.window(domain).last().copied().unwrap_or_default()
    }

    /// Average across all cores, `0.0` on a host with no cores reported.
    #[must_use]
    pub fn per_core_average(&self) -> f64 {
        if self.per_core.is_empty() {
            return 0.0;
        }
        self.per_core.iter().sum::<f64>() / self.per_core.len() as f64
    }
}
