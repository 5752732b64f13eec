// Model serialization tests (JSON field names, temperature shapes, memory derivation)

use hostmetrics::models::*;

fn snapshot(cores_temp: CoreTemperatures) -> Snapshot {
    Snapshot {
        system: SystemSection {
            hostname: "h".into(),
            platform: "linux".into(),
            distro: "Debian".into(),
            arch: "aarch64".into(),
            kernel: "6.1.0".into(),
            uptime: 1.5,
        },
        cpu: CpuSection {
            model: "Cortex-A76".into(),
            manufacturer: "ARM".into(),
            cores: 4,
            physical_cores: 4,
            speed: "2.4 GHz".into(),
            load_percent: 3.5,
            temperature: "51.2°C".into(),
            cores_temp,
        },
        memory: MemorySection {
            total: "8.00 GB".into(),
            used: "1.00 GB".into(),
            free: "7.00 GB".into(),
            available: "7.00 GB".into(),
            used_percent: 12.5,
            swap: SwapSection {
                total: "0 B".into(),
                used: "0 B".into(),
                free: "0 B".into(),
            },
        },
        disk: vec![DiskEntry {
            fs: "/dev/mmcblk0p2".into(),
            type_: "ext4".into(),
            mount: "/".into(),
            size: "58.00 GB".into(),
            used: "10.00 GB".into(),
            available: "48.00 GB".into(),
            used_percent: 17.24,
        }],
        network: vec![NetworkEntry {
            interface: "wlan0".into(),
            rx_bytes: "1.00 MB".into(),
            tx_bytes: "512.00 KB".into(),
            rx_per_sec: "0 B/s".into(),
            tx_per_sec: "0 B/s".into(),
        }],
        timestamp: "2026-10-19T08:15:00.123Z".into(),
    }
}

#[test]
fn test_snapshot_serialization_camel_case() {
    let json = serde_json::to_string(&snapshot(CoreTemperatures::unavailable())).unwrap();
    assert!(json.contains("\"physicalCores\""));
    assert!(json.contains("\"loadPercent\""));
    assert!(json.contains("\"coresTemp\""));
    assert!(json.contains("\"usedPercent\""));
    assert!(json.contains("\"rxPerSec\""));
    assert!(json.contains("\"type\":\"ext4\""));
    assert!(!json.contains("type_"));
}

#[test]
fn test_cores_temp_shapes() {
    let v = serde_json::to_value(snapshot(CoreTemperatures::unavailable())).unwrap();
    assert_eq!(v["cpu"]["coresTemp"], serde_json::json!("N/A"));

    let v = serde_json::to_value(snapshot(CoreTemperatures::PerCore(vec![
        "40°C".into(),
        "41°C".into(),
    ])))
    .unwrap();
    assert_eq!(v["cpu"]["coresTemp"], serde_json::json!(["40°C", "41°C"]));

    let back: Snapshot = serde_json::from_value(v).unwrap();
    assert!(!back.cpu.cores_temp.is_unavailable());
}

#[test]
fn test_memory_facts_from_reading() {
    let m = MemoryFacts::from(MemoryReading {
        total: 1000,
        used: 333,
        free: 667,
        available: 700,
        swap_total: 10,
        swap_used: 4,
        swap_free: 6,
    });
    assert_eq!(m.used_percent, 33.3);
    assert_eq!(m.swap.used, 4);
    assert_eq!(used_percent(5, 0), 0.0);
}

#[test]
fn test_fs_size_from_space() {
    let fs = FsSize::from_space("tmpfs".into(), "tmpfs".into(), "/run".into(), 0, 0);
    assert_eq!(fs.used, 0);
    assert_eq!(fs.use_percent, 0.0);

    let fs = FsSize::from_space("/dev/sda1".into(), "ext4".into(), "/".into(), 400, 100);
    assert_eq!(fs.used, 300);
    assert_eq!(fs.use_percent, 75.0);
}
