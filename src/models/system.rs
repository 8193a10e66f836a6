// Host identity, CPU and memory models, and the assembled snapshot

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::{DiskStats, ListeningPortSet};
use crate::normalize::percent_used;

/// Static host identity; read once at snapshot start.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostIdentity {
    pub hostname: String,
    pub platform: String,
    pub platform_version: String,
    pub kernel_version: String,
    pub architecture: String,
    pub boot_time: DateTime<Local>,
    pub uptime: Duration,
}

/// One reading of the aggregate CPU tick counters since boot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CounterSample {
    pub idle_ticks: u64,
    pub total_ticks: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CpuInfo {
    pub model_name: String,
    pub core_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CpuStatus {
    pub model_name: String,
    pub core_count: usize,
    pub usage_percent: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryStats {
    pub total_bytes: u64,
    pub available_bytes: u64,
}

impl MemoryStats {
    /// `(total - available) / total * 100`, 0 when total is 0.
    pub fn used_percent(&self) -> f64 {
        percent_used(self.total_bytes, self.available_bytes, true)
    }
}

/// Everything one run reports. Built once, rendered, dropped.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub host: HostIdentity,
    pub cpu: CpuStatus,
    pub memory: MemoryStats,
    pub disk: DiskStats,
    pub ports: ListeningPortSet,
}
