// Shared test helpers: fake procfs trees, a scripted counter source, a clock that never waits
#![allow(dead_code)]

use hostsnap::counter_source::{CounterSource, PlatformInfo};
use hostsnap::error::SourceError;
use hostsnap::models::{CounterSample, CpuInfo, DiskStats, MemoryStats, SocketRecord};
use hostsnap::sampler::Clock;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const STAT: &str = "cpu  100 0 50 800 10 0 0 0 0 0\ncpu0 100 0 50 800 10 0 0 0 0 0\nintr 1234\n";
pub const MEMINFO: &str = "MemTotal:       16777216 kB\nMemFree:         2097152 kB\nMemAvailable:    4194304 kB\nBuffers:          102400 kB\n";
pub const CPUINFO: &str = "processor\t: 0\nvendor_id\t: GenuineIntel\nmodel name\t: Intel(R) Xeon(R) CPU @ 2.20GHz\n\nprocessor\t: 1\nmodel name\t: Intel(R) Xeon(R) CPU @ 2.20GHz\n";
pub const TCP: &str = "  sl  local_address rem_address   st tx_queue rx_queue tr tm->when retrnsmt   uid  timeout inode\n   0: 00000000:0016 00000000:0000 0A 00000000:00000000 00:00000000 00000000     0        0 1001 1 0 100 0 0 10 0\n   1: 0100007F:1F90 00000000:0000 0A 00000000:00000000 00:00000000 00000000  1000        0 1002 1 0 100 0 0 10 0\n   2: 0F02000A:0016 0100000A:D431 01 00000000:00000000 02:000A7E8B 00000000     0        0 1003 4 0 20 4 29 10 -1\n";
pub const TCP6: &str = "  sl  local_address                         remote_address                        st tx_queue rx_queue tr tm->when retrnsmt   uid  timeout inode\n   0: 00000000000000000000000000000000:0016 00000000000000000000000000000000:0000 0A 00000000:00000000 00:00000000 00000000     0        0 2001 1 0 100 0 0 10 0\n   1: 00000000000000000000000001000000:0277 00000000000000000000000000000000:0000 0A 00000000:00000000 00:00000000 00000000     0        0 2002 1 0 100 0 0 10 0\n";

/// A procfs tree in a temp dir. Files are only present once written.
pub struct FakeProc {
    dir: tempfile::TempDir,
}

impl FakeProc {
    pub fn empty() -> Self {
        Self {
            dir: tempfile::TempDir::new().unwrap(),
        }
    }

    /// Every file the procfs source reads, with realistic content.
    pub fn full() -> Self {
        Self::empty()
            .with("sys/kernel/osrelease", "6.8.0-45-generic\n")
            .with("uptime", "7265.30 14000.12\n")
            .with("cpuinfo", CPUINFO)
            .with("stat", STAT)
            .with("meminfo", MEMINFO)
            .with("net/tcp", TCP)
            .with("net/tcp6", TCP6)
    }

    pub fn with(self, relative: &str, content: &str) -> Self {
        let path = self.dir.path().join(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, content).unwrap();
        self
    }

    pub fn without(self, relative: &str) -> Self {
        std::fs::remove_file(self.dir.path().join(relative)).unwrap();
        self
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

pub fn unavailable(path: &str) -> SourceError {
    SourceError::Unavailable {
        path: PathBuf::from(path),
        source: std::io::Error::from(std::io::ErrorKind::NotFound),
    }
}

pub fn malformed(path: &str) -> SourceError {
    SourceError::Malformed {
        path: PathBuf::from(path),
        detail: "bad".into(),
    }
}

/// In-memory counter source. CPU samples are handed out in order; once the
/// queue is empty every further read fails.
pub struct ScriptedSource {
    pub samples: RefCell<VecDeque<Result<CounterSample, SourceError>>>,
    pub memory: fn() -> Result<MemoryStats, SourceError>,
    pub disk: fn() -> Result<DiskStats, SourceError>,
    pub sockets: fn() -> Result<Vec<SocketRecord>, SourceError>,
    pub kernel: fn() -> Result<String, SourceError>,
    pub uptime: fn() -> Result<f64, SourceError>,
    pub disk_paths: RefCell<Vec<PathBuf>>,
}

impl ScriptedSource {
    pub fn new(samples: Vec<Result<CounterSample, SourceError>>) -> Self {
        Self {
            samples: RefCell::new(samples.into()),
            memory: || Err(unavailable("/proc/meminfo")),
            disk: || Err(unavailable("/")),
            sockets: || Err(unavailable("/proc/net/tcp")),
            kernel: || Err(unavailable("/proc/sys/kernel/osrelease")),
            uptime: || Err(unavailable("/proc/uptime")),
            disk_paths: RefCell::new(Vec::new()),
        }
    }

    pub fn ticks(pairs: &[(u64, u64)]) -> Self {
        Self::new(
            pairs
                .iter()
                .map(|&(idle_ticks, total_ticks)| {
                    Ok(CounterSample {
                        idle_ticks,
                        total_ticks,
                    })
                })
                .collect(),
        )
    }

    pub fn remaining_samples(&self) -> usize {
        self.samples.borrow().len()
    }
}

impl CounterSource for ScriptedSource {
    fn read_platform(&self) -> PlatformInfo {
        PlatformInfo {
            hostname: "testhost".into(),
            platform: "linux".into(),
            platform_version: "24.04".into(),
            architecture: "x86_64".into(),
        }
    }

    fn read_kernel_version(&self) -> Result<String, SourceError> {
        (self.kernel)()
    }

    fn read_uptime_seconds(&self) -> Result<f64, SourceError> {
        (self.uptime)()
    }

    fn read_cpu_info(&self) -> CpuInfo {
        CpuInfo {
            model_name: "Test CPU".into(),
            core_count: 4,
        }
    }

    fn read_cpu_tick_sample(&self) -> Result<CounterSample, SourceError> {
        self.samples
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(unavailable("/proc/stat")))
    }

    fn read_memory_counters(&self) -> Result<MemoryStats, SourceError> {
        (self.memory)()
    }

    fn read_disk_counters(&self, path: &Path) -> Result<DiskStats, SourceError> {
        self.disk_paths.borrow_mut().push(path.to_path_buf());
        (self.disk)()
    }

    fn read_listening_sockets(&self) -> Result<Vec<SocketRecord>, SourceError> {
        (self.sockets)()
    }
}

/// Records requested pauses and returns immediately.
#[derive(Default)]
pub struct RecordingClock {
    pub slept: RefCell<Vec<Duration>>,
}

impl Clock for RecordingClock {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        self.slept.borrow_mut().push(duration);
        std::future::ready(())
    }
}
