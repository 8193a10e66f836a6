// Linux counter formats: /proc text tables and statvfs.

use crate::error::SourceError;
use crate::models::{CounterSample, DiskStats, MemoryStats};
use crate::normalize::{blocks_to_bytes, kib_to_bytes};
use std::path::Path;
use std::time::Duration;

/// user, nice, system, idle, iowait, irq, softirq, steal.
const CPU_TICK_FIELDS: usize = 8;
const IDLE_FIELD: usize = 3;

pub(super) fn parse_kernel_release(content: &str) -> Option<String> {
    let release = content.trim();
    if release.is_empty() {
        return None;
    }
    Some(release.to_string())
}

/// First field of /proc/uptime: seconds since boot.
pub(super) fn parse_uptime(content: &str) -> Result<f64, String> {
    let first = content
        .split_whitespace()
        .next()
        .ok_or_else(|| "empty uptime".to_string())?;
    let secs: f64 = first
        .parse()
        .map_err(|_| format!("expected seconds, got '{first}'"))?;
    if secs < 0.0 || Duration::try_from_secs_f64(secs).is_err() {
        return Err(format!("uptime out of range: {secs}"));
    }
    Ok(secs)
}

/// Value of the first "model name" line of /proc/cpuinfo.
pub(super) fn parse_cpu_model(content: &str) -> Option<String> {
    content
        .lines()
        .filter(|line| line.contains("model name"))
        .find_map(|line| {
            let (_, value) = line.split_once(':')?;
            let value = value.trim();
            (!value.is_empty()).then(|| value.to_string())
        })
}

/// Aggregate `cpu` line of /proc/stat.
///
/// Sums the eight canonical tick fields; guest time is already counted in
/// user/nice and is ignored. Kernels that report fewer than eight fields are
/// accepted as long as the idle field is present.
pub(super) fn parse_cpu_ticks(content: &str) -> Result<CounterSample, String> {
    let line = content
        .lines()
        .next()
        .ok_or_else(|| "empty stat table".to_string())?;
    let mut fields = line.split_whitespace();
    if fields.next() != Some("cpu") {
        return Err("first line is not the aggregate cpu line".into());
    }
    let ticks = fields
        .take(CPU_TICK_FIELDS)
        .map(|f| f.parse::<u64>().map_err(|_| format!("bad tick value '{f}'")))
        .collect::<Result<Vec<u64>, String>>()?;
    if ticks.len() <= IDLE_FIELD {
        return Err(format!(
            "expected at least {} tick fields, got {}",
            IDLE_FIELD + 1,
            ticks.len()
        ));
    }
    Ok(CounterSample {
        idle_ticks: ticks[IDLE_FIELD],
        total_ticks: ticks.iter().fold(0u64, |acc, t| acc.saturating_add(*t)),
    })
}

/// `MemTotal` and `MemAvailable` from /proc/meminfo, converted from kB.
/// Keys match by prefix.
pub(super) fn parse_meminfo(content: &str) -> Result<MemoryStats, String> {
    let mut total = None;
    let mut available = None;
    for line in content.lines() {
        let mut parts = line.split_whitespace();
        let (Some(key), Some(value)) = (parts.next(), parts.next()) else {
            continue;
        };
        let slot = if key.starts_with("MemTotal") {
            &mut total
        } else if key.starts_with("MemAvailable") {
            &mut available
        } else {
            continue;
        };
        let kib: u64 = value
            .parse()
            .map_err(|_| format!("bad value '{value}' for {key}"))?;
        *slot = Some(kib_to_bytes(kib));
    }
    match (total, available) {
        (Some(total_bytes), Some(available_bytes)) => Ok(MemoryStats {
            total_bytes,
            available_bytes,
        }),
        (None, _) => Err("MemTotal missing".into()),
        (_, None) => Err("MemAvailable missing".into()),
    }
}

/// Filesystem size and the space available to unprivileged users.
#[cfg(unix)]
pub(super) fn statvfs_disk_stats(path: &Path) -> Result<DiskStats, SourceError> {
    use nix::sys::statvfs::statvfs;

    let stats = statvfs(path).map_err(|e| SourceError::unavailable(path, e.into()))?;
    Ok(disk_stats_from(
        u64::from(stats.blocks()),
        u64::from(stats.blocks_available()),
        u64::from(stats.fragment_size()),
    ))
}

/// `blocks` and `blocks_available` are counted in fragment-size units.
/// Free space is the unprivileged figure (`f_bavail`), not `f_bfree`.
#[cfg_attr(not(unix), allow(dead_code))]
pub(super) fn disk_stats_from(blocks: u64, blocks_available: u64, fragment_size: u64) -> DiskStats {
    DiskStats {
        total_bytes: blocks_to_bytes(blocks, fragment_size),
        free_bytes: blocks_to_bytes(blocks_available, fragment_size),
    }
}

#[cfg(not(unix))]
pub(super) fn statvfs_disk_stats(path: &Path) -> Result<DiskStats, SourceError> {
    Err(SourceError::unavailable(
        path,
        std::io::Error::from(std::io::ErrorKind::Unsupported),
    ))
}
