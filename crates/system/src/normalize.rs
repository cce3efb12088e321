//! Conversion of raw provider values into display units.
//!
//! Percentages, frequencies and temperatures pass through unchanged. Memory is
//! reported in GB and cumulative byte counters become MB/s rates.

use crate::source::{DiskCounters, NetCounters, PerDevice};
use std::collections::BTreeMap;
use std::time::Instant;

const GIB: f64 = (1u64 << 30) as f64;
const MIB: f64 = (1u64 << 20) as f64;

/// Bytes → gigabytes (2^30).
#[inline]
pub fn bytes_to_gb(bytes: u64) -> f64 {
    bytes as f64 / GIB
}

/// Turns one cumulative byte counter into a MB/s rate.
///
/// Holds the previous counter and the instant it was read; the first reading
/// only records a baseline and yields `0.0`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CounterRate {
    previous: Option<(u64, Instant)>,
}

impl CounterRate {
    /// Rate in MB/s between the previous reading and `counter` read at `at`.
    ///
    /// Yields `0.0` on the first reading, when no time has elapsed (the
    /// baseline is kept) and when the counter went backwards (the baseline is
    /// reset to the new value).
    pub fn rate(&mut self, counter: u64, at: Instant) -> f64 {
        let Some((prev_counter, prev_at)) = self.previous else {
            self.previous = Some((counter, at));
            return 0.0;
        };

        let elapsed = at.saturating_duration_since(prev_at).as_secs_f64();
        if elapsed <= 0.0 {
            return 0.0;
        }

        self.previous = Some((counter, at));
        match counter.checked_sub(prev_counter) {
            Some(delta) => delta as f64 / MIB / elapsed,
            None => 0.0,
        }
    }
}

/// Combined MB/s rate of one counter across a changing set of devices.
///
/// Each device keeps its own baseline. A device seen for the first time only
/// records a baseline, so its lifetime total never lands in a single tick;
/// devices missing from a reading are forgotten.
#[derive(Debug, Clone, Default)]
pub struct DeviceRates {
    devices: BTreeMap<String, CounterRate>,
}

impl DeviceRates {
    pub fn rate<'a, I>(&mut self, counters: I, at: Instant) -> f64
    where
        I: IntoIterator<Item = (&'a str, u64)>,
    {
        let mut seen = BTreeMap::new();
        let mut total = 0.0;
        for (name, counter) in counters {
            let mut device = self.devices.remove(name).unwrap_or_default();
            total += device.rate(counter, at);
            seen.insert(name.to_string(), device);
        }
        self.devices = seen;
        total
    }
}

/// Rates for the four cumulative counters tracked by the monitor.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    disk_read:  DeviceRates,
    disk_write: DeviceRates,
    net_rx:     DeviceRates,
    net_tx:     DeviceRates,
}

impl Normalizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// `(read, write)` in MB/s summed over all disks.
    pub fn disk(&mut self, disks: &PerDevice<DiskCounters>, at: Instant) -> (f64, f64) {
        let read = disks.iter().map(|(name, c)| (name.as_str(), c.read_bytes));
        let written = disks.iter().map(|(name, c)| (name.as_str(), c.written_bytes));
        (self.disk_read.rate(read, at), self.disk_write.rate(written, at))
    }

    /// `(download, upload)` in MB/s summed over all interfaces.
    pub fn network(&mut self, interfaces: &PerDevice<NetCounters>, at: Instant) -> (f64, f64) {
        let received = interfaces.iter().map(|(name, c)| (name.as_str(), c.received_bytes));
        let sent = interfaces.iter().map(|(name, c)| (name.as_str(), c.sent_bytes));
        (self.net_rx.rate(received, at), self.net_tx.rate(sent, at))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn memory_in_gigabytes() {
        assert_eq!(bytes_to_gb(8_589_934_592), 8.0);
        assert_eq!(bytes_to_gb(0), 0.0);
        assert_eq!(bytes_to_gb(512 * 1024 * 1024), 0.5);
    }

    #[test]
    fn first_reading_is_zero() {
        let mut rate = CounterRate::default();
        assert_eq!(rate.rate(987_654_321, Instant::now()), 0.0);
    }

    #[test]
    fn delta_over_elapsed_time() {
        let t0 = Instant::now();
        let mut rate = CounterRate::default();
        rate.rate(1_000_000, t0);

        let mbps = rate.rate(2_048_000, t0 + Duration::from_secs(1));
        assert!((mbps - 1.0).abs() < 1e-3, "got {mbps}");
    }

    #[test]
    fn uses_measured_not_nominal_interval() {
        let t0 = Instant::now();
        let mut rate = CounterRate::default();
        rate.rate(0, t0);

        // 4 MiB over 2 s.
        let mbps = rate.rate(4 * 1024 * 1024, t0 + Duration::from_secs(2));
        assert_eq!(mbps, 2.0);
    }

    #[test]
    fn unchanged_counter_is_zero() {
        let t0 = Instant::now();
        let mut rate = CounterRate::default();
        rate.rate(5_000, t0);
        assert_eq!(rate.rate(5_000, t0 + Duration::from_secs(1)), 0.0);
    }

    #[test]
    fn zero_elapsed_is_zero_and_keeps_baseline() {
        let t0 = Instant::now();
        let mut rate = CounterRate::default();
        rate.rate(0, t0);
        assert_eq!(rate.rate(1024 * 1024, t0), 0.0);

        // Still measured against the t0 baseline.
        let mbps = rate.rate(2 * 1024 * 1024, t0 + Duration::from_secs(1));
        assert_eq!(mbps, 2.0);
    }

    #[test]
    fn counter_reset_rebases() {
        let t0 = Instant::now();
        let mut rate = CounterRate::default();
        rate.rate(10 * 1024 * 1024, t0);
        assert_eq!(rate.rate(1024, t0 + Duration::from_secs(1)), 0.0);

        let mbps = rate.rate(1024 + 1024 * 1024, t0 + Duration::from_secs(2));
        assert_eq!(mbps, 1.0);
    }

    fn disks(entries: &[(&str, u64, u64)]) -> PerDevice<DiskCounters> {
        entries
            .iter()
            .map(|&(name, read_bytes, written_bytes)| {
                (name.to_string(), DiskCounters { read_bytes, written_bytes })
            })
            .collect()
    }

    #[test]
    fn counters_are_tracked_independently() {
        let t0 = Instant::now();
        let t1 = t0 + Duration::from_secs(1);
        let mut norm = Normalizer::new();

        norm.disk(&disks(&[("sda", 0, 0)]), t0);
        let eth0 = |received_bytes, sent_bytes| {
            PerDevice::from([("eth0".to_string(), NetCounters { received_bytes, sent_bytes })])
        };
        norm.network(&eth0(0, 0), t0);

        let (read, write) = norm.disk(&disks(&[("sda", 3 * 1024 * 1024, 1024 * 1024)]), t1);
        assert_eq!((read, write), (3.0, 1.0));

        let (down, up) = norm.network(&eth0(512 * 1024, 0), t1);
        assert_eq!((down, up), (0.5, 0.0));
    }

    #[test]
    fn sums_deltas_across_devices() {
        let t0 = Instant::now();
        let mut norm = Normalizer::new();
        norm.disk(&disks(&[("sda", 0, 0), ("sdb", 0, 0)]), t0);

        let (read, _) = norm.disk(
            &disks(&[("sda", 1024 * 1024, 0), ("sdb", 2 * 1024 * 1024, 0)]),
            t0 + Duration::from_secs(1),
        );
        assert_eq!(read, 3.0);
    }

    #[test]
    fn new_device_only_sets_a_baseline() {
        let t0 = Instant::now();
        let mut norm = Normalizer::new();
        norm.disk(&disks(&[("sda", 0, 0)]), t0);

        // A USB disk appears carrying 50 GiB of lifetime reads.
        let (read, write) = norm.disk(
            &disks(&[("sda", 1024 * 1024, 0), ("sdc", 50 << 30, 10 << 30)]),
            t0 + Duration::from_secs(1),
        );
        assert_eq!((read, write), (1.0, 0.0));

        let (read, _) = norm.disk(
            &disks(&[("sda", 1024 * 1024, 0), ("sdc", (50 << 30) + 2 * 1024 * 1024, 10 << 30)]),
            t0 + Duration::from_secs(2),
        );
        assert_eq!(read, 2.0);
    }

    #[test]
    fn vanished_device_is_forgotten() {
        let t0 = Instant::now();
        let mut rates = DeviceRates::default();
        rates.rate([("wg0", 1_000), ("eth0", 0)], t0);
        assert_eq!(rates.rate([("eth0", 1024 * 1024)], t0 + Duration::from_secs(1)), 1.0);

        // Reappearing is treated as new: baseline only.
        let back = rates.rate(
            [("wg0", 9u64 << 30), ("eth0", 1024 * 1024)],
            t0 + Duration::from_secs(2),
        );
        assert_eq!(back, 0.0);
    }
}
