// Assembles host identity, CPU, memory, disk and ports into one Snapshot.
// Each stage degrades to a neutral value on its own; none aborts the run.

use crate::counter_source::CounterSource;
use crate::models::{CpuStatus, DiskStats, HostIdentity, ListeningPortSet, MemoryStats, Snapshot};
use crate::normalize::uptime_from_secs;
use crate::ports;
use crate::sampler::{Clock, DeltaSampler};
use chrono::Local;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Inputs the assembler needs besides the source and clock.
#[derive(Debug, Clone)]
pub struct AssemblerOptions {
    pub sample_interval: Duration,
    pub disk_path: PathBuf,
}

impl Default for AssemblerOptions {
    fn default() -> Self {
        Self {
            sample_interval: crate::sampler::DEFAULT_SAMPLE_INTERVAL,
            disk_path: PathBuf::from("/"),
        }
    }
}

pub struct SnapshotAssembler<'a, S, C> {
    source: &'a S,
    clock: &'a C,
    options: AssemblerOptions,
}

impl<'a, S: CounterSource, C: Clock> SnapshotAssembler<'a, S, C> {
    pub fn new(source: &'a S, clock: &'a C, options: AssemblerOptions) -> Self {
        Self {
            source,
            clock,
            options,
        }
    }

    /// Runs every stage in report order: host, CPU, memory, disk, ports.
    pub async fn assemble(&self) -> Snapshot {
        let host = self.host_identity();
        let cpu = self.cpu_status().await;
        let memory = self.memory();
        let disk = self.disk(&self.options.disk_path);
        let ports = self.listening_ports();
        Snapshot {
            host,
            cpu,
            memory,
            disk,
            ports,
        }
    }

    #[instrument(skip(self), fields(stage = "host"))]
    pub fn host_identity(&self) -> HostIdentity {
        let platform = self.source.read_platform();
        let kernel_version = self.source.read_kernel_version().unwrap_or_else(|e| {
            warn!(error = %e, "kernel version unavailable");
            "unknown".into()
        });
        let uptime = match self.source.read_uptime_seconds() {
            Ok(secs) => uptime_from_secs(secs),
            Err(e) => {
                warn!(error = %e, "uptime unavailable");
                Duration::ZERO
            }
        };
        let now = Local::now();
        let boot_time = chrono::Duration::from_std(uptime)
            .ok()
            .and_then(|d| now.checked_sub_signed(d))
            .unwrap_or(now);
        debug!(hostname = %platform.hostname, uptime_secs = uptime.as_secs(), "host identity read");
        HostIdentity {
            hostname: platform.hostname,
            platform: platform.platform,
            platform_version: platform.platform_version,
            kernel_version,
            architecture: platform.architecture,
            boot_time,
            uptime,
        }
    }

    #[instrument(skip(self), fields(stage = "cpu"))]
    pub async fn cpu_status(&self) -> CpuStatus {
        let info = self.source.read_cpu_info();
        let usage_percent = DeltaSampler::new(self.source, self.clock)
            .sample(self.options.sample_interval)
            .await;
        debug!(usage_percent, cores = info.core_count, "cpu sampled");
        CpuStatus {
            model_name: info.model_name,
            core_count: info.core_count,
            usage_percent,
        }
    }

    #[instrument(skip(self), fields(stage = "memory"))]
    pub fn memory(&self) -> MemoryStats {
        self.source.read_memory_counters().unwrap_or_else(|e| {
            warn!(error = %e, "memory counters unavailable");
            MemoryStats::default()
        })
    }

    #[instrument(skip(self), fields(stage = "disk"))]
    pub fn disk(&self, path: &Path) -> DiskStats {
        self.source.read_disk_counters(path).unwrap_or_else(|e| {
            warn!(error = %e, "disk counters unavailable");
            DiskStats::default()
        })
    }

    #[instrument(skip(self), fields(stage = "ports"))]
    pub fn listening_ports(&self) -> ListeningPortSet {
        match self.source.read_listening_sockets() {
            Ok(records) => {
                let ports = ports::collect_records(&records);
                debug!(count = ports.len(), "listening ports collected");
                ports
            }
            Err(e) => {
                warn!(error = %e, "socket tables unavailable");
                ListeningPortSet::new()
            }
        }
    }
}
