use crate::source::{NetCounters, PerDevice};
use sysinfo::Networks;

/// Cumulative bytes received and sent per interface.
///
/// `None` when no interface is listed.
pub fn counters(networks: &Networks) -> Option<PerDevice<NetCounters>> {
    if networks.is_empty() {
        return None;
    }

    // `total_*` are totals since boot, unlike `received()` / `transmitted()`
    // which are deltas since the last refresh.
    Some(by_interface(networks.iter().map(|(name, data)| {
        (
            name.as_str(),
            NetCounters {
                received_bytes: data.total_received(),
                sent_bytes:     data.total_transmitted(),
            },
        )
    })))
}

pub fn by_interface<'a, I>(entries: I) -> PerDevice<NetCounters>
where
    I: IntoIterator<Item = (&'a str, NetCounters)>,
{
    entries
        .into_iter()
        .map(|(name, counters)| (name.to_string(), counters))
        .collect()
}
