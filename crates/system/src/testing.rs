//! Scripted telemetry sources for unit tests.

use crate::source::{DiskCounters, GpuTelemetry, HostTelemetry, NetCounters, PerDevice};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// What the scripted host reports for one pass.
#[derive(Debug, Clone, Default)]
pub struct HostReading {
    pub cpu_usage:       Option<f32>,
    pub cpu_frequency:   Option<u64>,
    pub cpu_temperature: Option<f32>,
    pub per_core:        Option<Vec<f32>>,
    pub memory_used:     Option<u64>,
    pub disk:            Option<PerDevice<DiskCounters>>,
    pub net:             Option<PerDevice<NetCounters>>,
}

/// Host that replays one [`HostReading`] per refresh, repeating the last.
#[derive(Debug, Default)]
pub struct ScriptedHost {
    pub cores:      usize,
    pub script:     VecDeque<HostReading>,
    pub current:    HostReading,
    /// Blocking delay inside every refresh, to simulate a stalled adapter.
    pub stall:      Duration,
    /// Runtime instant of every refresh.
    pub refreshes:  Arc<Mutex<Vec<tokio::time::Instant>>>,
}

impl ScriptedHost {
    pub fn new(cores: usize, script: impl IntoIterator<Item = HostReading>) -> Self {
        Self {
            cores,
            script: script.into_iter().collect(),
            ..Default::default()
        }
    }
}

impl HostTelemetry for ScriptedHost {
    fn refresh(&mut self) {
        if !self.stall.is_zero() {
            std::thread::sleep(self.stall);
        }
        self.refreshes.lock().unwrap().push(tokio::time::Instant::now());
        if let Some(next) = self.script.pop_front() {
            self.current = next;
        }
    }

    fn core_count(&self) -> usize {
        self.cores
    }

    fn cpu_usage(&self) -> Option<f32> {
        self.current.cpu_usage
    }

    fn cpu_frequency(&self) -> Option<u64> {
        self.current.cpu_frequency
    }

    fn cpu_temperature(&self) -> Option<f32> {
        self.current.cpu_temperature
    }

    fn per_core_usage(&self) -> Option<Vec<f32>> {
        self.current.per_core.clone()
    }

    fn memory_used(&self) -> Option<u64> {
        self.current.memory_used
    }

    fn disk_counters(&self) -> Option<PerDevice<DiskCounters>> {
        self.current.disk.clone()
    }

    fn net_counters(&self) -> Option<PerDevice<NetCounters>> {
        self.current.net.clone()
    }
}

/// A single device named `name`.
pub fn one<C>(name: &str, counters: C) -> PerDevice<C> {
    PerDevice::from([(name.to_string(), counters)])
}

/// GPU that always reports the same values.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedGpu {
    pub utilization: u32,
    pub temperature: u32,
    pub frequency:   u32,
}

impl GpuTelemetry for FixedGpu {
    fn utilization(&self) -> Option<u32> {
        Some(self.utilization)
    }

    fn temperature(&self) -> Option<u32> {
        Some(self.temperature)
    }

    fn frequency(&self) -> Option<u32> {
        Some(self.frequency)
    }
}
