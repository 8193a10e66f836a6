// Unit conversions and percentage helpers (no I/O)

use chrono::{Local, TimeZone};
use std::time::Duration;

const BYTES_PER_GIB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Boot time layout used in the host overview.
pub const BOOT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

pub fn bytes_to_gib(bytes: u64) -> f64 {
    bytes as f64 / BYTES_PER_GIB
}

/// Percentage of `total` in use.
///
/// When `is_available` is true the second argument is the unused amount and the
/// result is `(total - x) / total * 100`; otherwise it is the used amount and
/// the result is `x / total * 100`. A zero total yields 0, and the result is
/// kept inside `[0, 100]` when `x` exceeds `total`.
pub fn percent_used(total: u64, used_or_available: u64, is_available: bool) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let used = if is_available {
        total.saturating_sub(used_or_available)
    } else {
        used_or_available.min(total)
    };
    used as f64 / total as f64 * 100.0
}

/// Busy share of a tick window: `100 * (total - idle) / total`.
/// Returns 0 for an empty window or when idle exceeds total.
pub fn busy_percent(idle_delta: u64, total_delta: u64) -> f64 {
    if total_delta == 0 || idle_delta > total_delta {
        return 0.0;
    }
    let pct = 100.0 * (total_delta - idle_delta) as f64 / total_delta as f64;
    if pct.is_finite() { pct.clamp(0.0, 100.0) } else { 0.0 }
}

/// Local calendar time for a Unix timestamp, `"unknown"` if out of range.
pub fn format_boot_time(epoch_secs: i64) -> String {
    match Local.timestamp_opt(epoch_secs, 0).single() {
        Some(t) => t.format(BOOT_TIME_FORMAT).to_string(),
        None => "unknown".into(),
    }
}

/// Whole hours of uptime, rounded down.
pub fn format_uptime(uptime: Duration) -> u64 {
    uptime.as_secs() / 3600
}

/// `kB` figure from the memory table, in bytes.
pub fn kib_to_bytes(kib: u64) -> u64 {
    kib.saturating_mul(1024)
}

/// Filesystem size from a block count and block size.
pub fn blocks_to_bytes(blocks: u64, block_size: u64) -> u64 {
    blocks.saturating_mul(block_size)
}

/// Uptime seconds as read from the kernel. Negative, non-finite or
/// unrepresentable input is 0.
pub fn uptime_from_secs(secs: f64) -> Duration {
    if secs > 0.0 {
        Duration::try_from_secs_f64(secs).unwrap_or(Duration::ZERO)
    } else {
        Duration::ZERO
    }
}
