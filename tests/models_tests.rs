// Model serialization (JSON camelCase) and derived percentages

use chrono::Local;
use hostsnap::models::*;
use std::time::Duration;

#[test]
fn test_memory_used_percent() {
    let mem = MemoryStats {
        total_bytes: 1000,
        available_bytes: 250,
    };
    assert_eq!(mem.used_percent(), 75.0);
    assert_eq!(MemoryStats::default().used_percent(), 0.0);
}

#[test]
fn test_disk_used_percent_uses_available_space() {
    let disk = DiskStats {
        total_bytes: 10_737_418_240,
        free_bytes: 10_737_418_240,
    };
    assert_eq!(disk.used_percent(), 0.0);
    assert_eq!(DiskStats::default().used_percent(), 0.0);
}

#[test]
fn test_snapshot_serialization_camel_case() {
    let snapshot = Snapshot {
        host: HostIdentity {
            hostname: "box".into(),
            platform: "linux".into(),
            platform_version: "12".into(),
            kernel_version: "6.1.0".into(),
            architecture: "x86_64".into(),
            boot_time: Local::now(),
            uptime: Duration::from_secs(60),
        },
        cpu: CpuStatus {
            model_name: "cpu".into(),
            core_count: 2,
            usage_percent: 12.5,
        },
        memory: MemoryStats {
            total_bytes: 2048,
            available_bytes: 1024,
        },
        disk: DiskStats::default(),
        ports: ListeningPortSet::from([443, 22, 22]),
    };
    let json = serde_json::to_string(&snapshot).unwrap();
    assert!(json.contains("\"kernelVersion\""));
    assert!(json.contains("\"bootTime\""));
    assert!(json.contains("\"usagePercent\""));
    assert!(json.contains("\"availableBytes\""));
    assert!(json.contains("\"freeBytes\""));
    assert!(json.contains("\"ports\":[22,443]"));
    let back: Snapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back.cpu.usage_percent, 12.5);
    assert_eq!(back.ports.len(), 2);
}
