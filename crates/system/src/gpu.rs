use crate::source::GpuTelemetry;
use nvml_wrapper::enum_wrappers::device::{Clock, TemperatureSensor};
use nvml_wrapper::{Device, Nvml};
use telemon_core::{Result, TelemonError};
use tracing::trace;

/// [`GpuTelemetry`] for one NVIDIA device through NVML.
pub struct NvmlGpu {
    nvml:  Nvml,
    index: u32,
}

impl NvmlGpu {
    /// Load NVML and check that device 0 exists.
    pub fn init() -> Result<Self> {
        Self::with_index(0)
    }

    pub fn with_index(index: u32) -> Result<Self> {
        let nvml = Nvml::init().map_err(|e| TelemonError::Gpu(format!("NVML init failed: {e}")))?;

        let name = nvml
            .device_by_index(index)
            .and_then(|device| device.name())
            .map_err(|e| TelemonError::Gpu(format!("GPU {index} not available: {e}")))?;
        tracing::info!("Sampling GPU {index}: {name}");

        Ok(Self { nvml, index })
    }

    // NVML handles borrow the library, so the device is looked up per query.
    fn device(&self) -> Option<Device<'_>> {
        self.nvml
            .device_by_index(self.index)
            .map_err(|e| trace!("GPU {} lookup failed: {e}", self.index))
            .ok()
    }
}

impl GpuTelemetry for NvmlGpu {
    fn utilization(&self) -> Option<u32> {
        self.device()?
            .utilization_rates()
            .map(|u| u.gpu)
            .map_err(|e| trace!("GPU utilization query failed: {e}"))
            .ok()
    }

    fn temperature(&self) -> Option<u32> {
        self.device()?
            .temperature(TemperatureSensor::Gpu)
            .map_err(|e| trace!("GPU temperature query failed: {e}"))
            .ok()
    }

    fn frequency(&self) -> Option<u32> {
        self.device()?
            .clock_info(Clock::Graphics)
            .map_err(|e| trace!("GPU clock query failed: {e}"))
            .ok()
    }
}

/// Stand-in used when no GPU binding could be initialised.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoGpu;

impl GpuTelemetry for NoGpu {
    fn utilization(&self) -> Option<u32> {
        None
    }

    fn temperature(&self) -> Option<u32> {
        None
    }

    fn frequency(&self) -> Option<u32> {
        None
    }
}
