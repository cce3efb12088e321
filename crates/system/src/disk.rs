use crate::source::{DiskCounters, PerDevice};
use sysinfo::Disks;

/// Cumulative bytes read and written per disk device.
///
/// `None` when no disk is listed.
pub fn counters(disks: &Disks) -> Option<PerDevice<DiskCounters>> {
    let list = disks.list();
    if list.is_empty() {
        return None;
    }

    Some(by_device(list.iter().map(|d| {
        let usage = d.usage();
        (
            d.name().to_string_lossy().into_owned(),
            DiskCounters {
                read_bytes:    usage.total_read_bytes,
                written_bytes: usage.total_written_bytes,
            },
        )
    })))
}

/// Collapse mount entries onto their device.
///
/// sysinfo lists one entry per mount point, so a device mounted twice (bind
/// mounts, btrfs subvolumes) shows up twice with the same counters. The first
/// entry for each name is kept.
pub fn by_device<I>(entries: I) -> PerDevice<DiskCounters>
where
    I: IntoIterator<Item = (String, DiskCounters)>,
{
    let mut devices = PerDevice::new();
    for (name, counters) in entries {
        devices.entry(name).or_insert(counters);
    }
    devices
}
