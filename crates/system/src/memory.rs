use sysinfo::System;

/// Bytes currently used system-wide; `None` if the OS reported no memory.
pub fn used_bytes(sys: &System) -> Option<u64> {
    if sys.total_memory() == 0 {
        return None;
    }
    Some(sys.used_memory())
}
