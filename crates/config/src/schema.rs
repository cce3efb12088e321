use serde::{Deserialize, Serialize};
use std::time::Duration;
use telemon_core::{Result, TelemonError};

/// Root configuration structure parsed from `telemon.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TelemonConfig {
    /// Sampling cadence and history length.
    pub sampling: SamplingConfig,
}

impl TelemonConfig {
    /// Reject values the sampler cannot run with.
    pub fn validate(&self) -> Result<()> {
        self.sampling.validate()
    }
}

/// Settings for the sampling scheduler and the series windows.
///
/// The core count is not configurable; it is taken from the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingConfig {
    /// Delay between the end of one pass and the start of the next.
    pub tick_interval_ms: u64,
    /// Samples retained by every windowed series.
    pub window_size: usize,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 1_000,
            window_size:      60,
        }
    }
}

impl SamplingConfig {
    #[inline]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn validate(&self) -> Result<()> {
        if self.tick_interval_ms == 0 {
            return Err(TelemonError::Config(
                "sampling.tick_interval_ms must be greater than 0".to_string(),
            ));
        }
        if self.window_size == 0 {
            return Err(TelemonError::Config(
                "sampling.window_size must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}
