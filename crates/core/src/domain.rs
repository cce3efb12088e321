use serde::{Deserialize, Serialize};
use std::fmt;

/// Every metric the monitor tracks.
///
/// All domains except [`MetricDomain::PerCoreUsage`] own a windowed
/// [`Series`](crate::Series); per-core usage is a snapshot overwritten every
/// tick ([`CoreLoads`](crate::CoreLoads)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricDomain {
    CpuUsage,
    CpuTemperature,
    CpuFrequency,
    PerCoreUsage,
    MemoryUsed,
    DiskReadRate,
    DiskWriteRate,
    NetDownloadRate,
    NetUploadRate,
    GpuUsage,
    GpuTemperature,
    GpuFrequency,
}

impl MetricDomain {
    /// All domains, in display order.
    pub const ALL: [Self; 12] = [
        Self::CpuUsage,
        Self::CpuTemperature,
        Self::CpuFrequency,
        Self::PerCoreUsage,
        Self::MemoryUsed,
        Self::DiskReadRate,
        Self::DiskWriteRate,
        Self::NetDownloadRate,
        Self::NetUploadRate,
        Self::GpuUsage,
        Self::GpuTemperature,
        Self::GpuFrequency,
    ];

    /// Domains backed by a windowed series (everything but per-core usage).
    pub const WINDOWED: [Self; 11] = [
        Self::CpuUsage,
        Self::CpuTemperature,
        Self::CpuFrequency,
        Self::MemoryUsed,
        Self::DiskReadRate,
        Self::DiskWriteRate,
        Self::NetDownloadRate,
        Self::NetUploadRate,
        Self::GpuUsage,
        Self::GpuTemperature,
        Self::GpuFrequency,
    ];

    /// Stable snake_case key, e.g. `"disk_read_rate"`.
    pub fn key(self) -> &'static str {
        match self {
            Self::CpuUsage        => "cpu_usage",
            Self::CpuTemperature  => "cpu_temperature",
            Self::CpuFrequency    => "cpu_frequency",
            Self::PerCoreUsage    => "per_core_usage",
            Self::MemoryUsed      => "memory_used",
            Self::DiskReadRate    => "disk_read_rate",
            Self::DiskWriteRate   => "disk_write_rate",
            Self::NetDownloadRate => "net_download_rate",
            Self::NetUploadRate   => "net_upload_rate",
            Self::GpuUsage        => "gpu_usage",
            Self::GpuTemperature  => "gpu_temperature",
            Self::GpuFrequency    => "gpu_frequency",
        }
    }

    /// Human-readable chart title.
    pub fn title(self) -> &'static str {
        match self {
            Self::CpuUsage        => "CPU Usage",
            Self::CpuTemperature  => "CPU Temperature",
            Self::CpuFrequency    => "CPU Frequency",
            Self::PerCoreUsage    => "CPU Core Usage",
            Self::MemoryUsed      => "Memory Usage",
            Self::DiskReadRate    => "Drive Read",
            Self::DiskWriteRate   => "Drive Write",
            Self::NetDownloadRate => "Network Download",
            Self::NetUploadRate   => "Network Upload",
            Self::GpuUsage        => "GPU Usage",
            Self::GpuTemperature  => "GPU Temperature",
            Self::GpuFrequency    => "GPU Frequency",
        }
    }

    /// Display unit of the normalized samples.
    pub fn unit(self) -> &'static str {
        match self {
            Self::CpuUsage | Self::PerCoreUsage | Self::GpuUsage => "%",
            Self::CpuTemperature | Self::GpuTemperature => "°C",
            Self::CpuFrequency | Self::GpuFrequency => "MHz",
            Self::MemoryUsed => "GB",
            Self::DiskReadRate
            | Self::DiskWriteRate
            | Self::NetDownloadRate
            | Self::NetUploadRate => "MB/s",
        }
    }

    #[inline]
    pub fn is_windowed(self) -> bool {
        self != Self::PerCoreUsage
    }
}

impl fmt::Display for MetricDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
