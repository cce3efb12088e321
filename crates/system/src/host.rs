use crate::cpu::{self, SensorKey, CPU_TEMP_SENSOR};
use crate::source::{DiskCounters, HostTelemetry, NetCounters, PerDevice};
use crate::{disk, memory, network};
use sysinfo::{Components, Disks, Networks, System};

/// [`HostTelemetry`] backed by `sysinfo`.
pub struct HostProbe {
    sys:        System,
    disks:      Disks,
    networks:   Networks,
    components: Components,
    cpu_sensor: SensorKey,
}

impl HostProbe {
    pub fn new() -> Self {
        let mut sys = System::new();
        // Lists the cores and seeds the usage baseline for the first pass.
        sys.refresh_cpu_all();
        sys.refresh_memory();

        let probe = Self {
            sys,
            disks:      Disks::new_with_refreshed_list(),
            networks:   Networks::new_with_refreshed_list(),
            components: Components::new_with_refreshed_list(),
            cpu_sensor: CPU_TEMP_SENSOR,
        };
        tracing::debug!(
            cores = probe.core_count(),
            disks = probe.disks.list().len(),
            interfaces = probe.networks.len(),
            sensors = probe.components.list().len(),
            "host probe ready"
        );
        probe
    }
}

impl Default for HostProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl HostTelemetry for HostProbe {
    fn refresh(&mut self) {
        self.sys.refresh_cpu_all();
        self.sys.refresh_memory();
        self.disks.refresh(true);
        self.networks.refresh(true);
        self.components.refresh(true);
    }

    fn core_count(&self) -> usize {
        self.sys.cpus().len()
    }

    fn cpu_usage(&self) -> Option<f32> {
        cpu::usage(&self.sys)
    }

    fn cpu_frequency(&self) -> Option<u64> {
        cpu::frequency(&self.sys)
    }

    fn cpu_temperature(&self) -> Option<f32> {
        cpu::temperature(&self.components, &self.cpu_sensor)
    }

    fn per_core_usage(&self) -> Option<Vec<f32>> {
        cpu::per_core_usage(&self.sys)
    }

    fn memory_used(&self) -> Option<u64> {
        memory::used_bytes(&self.sys)
    }

    fn disk_counters(&self) -> Option<PerDevice<DiskCounters>> {
        disk::counters(&self.disks)
    }

    fn net_counters(&self) -> Option<PerDevice<NetCounters>> {
        network::counters(&self.networks)
    }
}
