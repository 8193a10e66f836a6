// Domain models

mod network;
mod storage;
mod system;

pub use network::{AddressFamily, ListeningPortSet, SocketRecord, TCP_LISTEN};
pub use storage::DiskStats;
pub use system::{CounterSample, CpuInfo, CpuStatus, HostIdentity, MemoryStats, Snapshot};
