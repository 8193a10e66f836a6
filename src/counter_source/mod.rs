// Raw counter reads: procfs files, filesystem block stats, host names

mod linux;

use crate::error::SourceError;
use crate::models::{AddressFamily, CounterSample, CpuInfo, DiskStats, MemoryStats, SocketRecord};
use crate::ports;
use std::path::{Path, PathBuf};

/// Identity fields that come from the platform rather than a counter file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlatformInfo {
    pub hostname: String,
    pub platform: String,
    pub platform_version: String,
    pub architecture: String,
}

/// Every read is independent and best-effort; a failed read is reported as
/// an `Err` for that metric only.
pub trait CounterSource {
    fn read_platform(&self) -> PlatformInfo;

    fn read_kernel_version(&self) -> Result<String, SourceError>;

    fn read_uptime_seconds(&self) -> Result<f64, SourceError>;

    /// Model name falls back to `"Unknown"`; core count always succeeds.
    fn read_cpu_info(&self) -> CpuInfo;

    fn read_cpu_tick_sample(&self) -> Result<CounterSample, SourceError>;

    fn read_memory_counters(&self) -> Result<MemoryStats, SourceError>;

    fn read_disk_counters(&self, path: &Path) -> Result<DiskStats, SourceError>;

    /// LISTEN rows from the IPv4 and IPv6 TCP tables.
    fn read_listening_sockets(&self) -> Result<Vec<SocketRecord>, SourceError>;
}

/// Reads counters from a procfs mount (normally `/proc`).
#[derive(Debug, Clone)]
pub struct ProcfsSource {
    proc_root: PathBuf,
}

impl Default for ProcfsSource {
    fn default() -> Self {
        Self::new("/proc")
    }
}

impl ProcfsSource {
    pub fn new(proc_root: impl Into<PathBuf>) -> Self {
        Self {
            proc_root: proc_root.into(),
        }
    }

    fn read(&self, relative: &str) -> Result<(PathBuf, String), SourceError> {
        let path = self.proc_root.join(relative);
        match std::fs::read_to_string(&path) {
            Ok(content) => Ok((path, content)),
            Err(e) => Err(SourceError::unavailable(&path, e)),
        }
    }
}

impl CounterSource for ProcfsSource {
    fn read_platform(&self) -> PlatformInfo {
        PlatformInfo {
            hostname: sysinfo::System::host_name().unwrap_or_default(),
            platform: sysinfo::System::name().unwrap_or_else(|| std::env::consts::OS.into()),
            platform_version: sysinfo::System::os_version().unwrap_or_default(),
            architecture: std::env::consts::ARCH.into(),
        }
    }

    fn read_kernel_version(&self) -> Result<String, SourceError> {
        let (path, content) = self.read("sys/kernel/osrelease")?;
        linux::parse_kernel_release(&content)
            .ok_or_else(|| SourceError::malformed(&path, "empty kernel release"))
    }

    fn read_uptime_seconds(&self) -> Result<f64, SourceError> {
        let (path, content) = self.read("uptime")?;
        linux::parse_uptime(&content).map_err(|detail| SourceError::malformed(&path, detail))
    }

    fn read_cpu_info(&self) -> CpuInfo {
        let model_name = self
            .read("cpuinfo")
            .ok()
            .and_then(|(_, content)| linux::parse_cpu_model(&content))
            .unwrap_or_else(|| "Unknown".into());
        CpuInfo {
            model_name,
            core_count: logical_core_count(),
        }
    }

    fn read_cpu_tick_sample(&self) -> Result<CounterSample, SourceError> {
        let (path, content) = self.read("stat")?;
        linux::parse_cpu_ticks(&content).map_err(|detail| SourceError::malformed(&path, detail))
    }

    fn read_memory_counters(&self) -> Result<MemoryStats, SourceError> {
        let (path, content) = self.read("meminfo")?;
        linux::parse_meminfo(&content).map_err(|detail| SourceError::malformed(&path, detail))
    }

    fn read_disk_counters(&self, path: &Path) -> Result<DiskStats, SourceError> {
        linux::statvfs_disk_stats(path)
    }

    fn read_listening_sockets(&self) -> Result<Vec<SocketRecord>, SourceError> {
        let mut records = Vec::new();
        let mut last_err = None;
        let mut any_read = false;
        let tables = [
            ("net/tcp", AddressFamily::Ipv4),
            ("net/tcp6", AddressFamily::Ipv6),
        ];
        for (table, family) in tables {
            match self.read(table) {
                Ok((_, content)) => {
                    any_read = true;
                    records.extend(ports::listening_records(&content, family));
                }
                Err(e) => {
                    tracing::debug!(error = %e, "socket table skipped");
                    last_err = Some(e);
                }
            }
        }
        match last_err {
            Some(e) if !any_read => Err(e),
            _ => Ok(records),
        }
    }
}

/// Logical cores visible to this process.
fn logical_core_count() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}
