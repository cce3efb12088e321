use sysinfo::{Components, System};

/// A hardware-specific (group, label) pair identifying one thermal sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SensorKey {
    /// hwmon driver name, e.g. `"k10temp"`.
    pub group: &'static str,
    /// Sensor label within the group, e.g. `"Tctl"`.
    pub label: &'static str,
}

/// AMD Ryzen control temperature.
pub const CPU_TEMP_SENSOR: SensorKey = SensorKey {
    group: "k10temp",
    label: "Tctl",
};

/// One entry of the sensor map exposed by the OS.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorReading<'a> {
    pub group:   &'a str,
    pub label:   &'a str,
    pub celsius: Option<f32>,
}

/// Find the temperature reported under `key`.
///
/// The first matching sensor with a usable reading wins. A missing sensor is
/// a normal outcome and yields `None`.
pub fn find_temperature<'a, I>(readings: I, key: &SensorKey) -> Option<f32>
where
    I: IntoIterator<Item = SensorReading<'a>>,
{
    readings
        .into_iter()
        .filter(|r| r.group == key.group && r.label == key.label)
        .find_map(|r| r.celsius.filter(|c| c.is_finite()))
}

/// Split a sysinfo component label (`"k10temp Tctl"`) into group and label.
pub fn split_component_label(label: &str) -> (&str, &str) {
    label.split_once(' ').unwrap_or((label, ""))
}

/// Temperature of the sensor identified by `key`.
pub fn temperature(components: &Components, key: &SensorKey) -> Option<f32> {
    let readings = components.list().iter().map(|c| {
        let (group, label) = split_component_label(c.label());
        SensorReading {
            group,
            label,
            celsius: c.temperature(),
        }
    });
    find_temperature(readings, key)
}

/// Global CPU utilisation; `None` before any core has been listed.
pub fn usage(sys: &System) -> Option<f32> {
    if sys.cpus().is_empty() {
        return None;
    }
    Some(sys.global_cpu_usage())
}

/// Per-core utilisation ordered by core index.
pub fn per_core_usage(sys: &System) -> Option<Vec<f32>> {
    if sys.cpus().is_empty() {
        return None;
    }
    Some(sys.cpus().iter().map(|c| c.cpu_usage()).collect())
}

/// Mean clock speed across cores in MHz.
pub fn frequency(sys: &System) -> Option<u64> {
    mean_frequency(sys.cpus().iter().map(|c| c.frequency()))
}

/// Mean of per-core clocks; `None` for no cores or an all-zero report.
pub fn mean_frequency<I>(per_core_mhz: I) -> Option<u64>
where
    I: IntoIterator<Item = u64>,
{
    let (sum, count) = per_core_mhz
        .into_iter()
        .fold((0u64, 0u64), |(sum, count), mhz| (sum.saturating_add(mhz), count + 1));
    if count == 0 {
        return None;
    }
    let mean = sum / count;
    (mean > 0).then_some(mean)
}
