// Shared test helpers: a scriptable HardwareProvider and fixture /proc directories

#![allow(dead_code)]

use async_trait::async_trait;
use hostmetrics::error::CollectError;
use hostmetrics::models::*;
use hostmetrics::provider::HardwareProvider;
use std::time::Duration;

pub const LOCAL_TOTAL: u64 = 8 * 1024 * 1024 * 1024;
pub const LOCAL_USED: u64 = 2 * 1024 * 1024 * 1024;

pub const HOST_MEMINFO: &str = "\
MemTotal:       16000000 kB
MemFree:         8000000 kB
MemAvailable:   10000000 kB
Buffers:               0 kB
Cached:                0 kB
SwapCached:         1234 kB
SwapTotal:       2097152 kB
SwapFree:        1048576 kB
";

/// Canned provider; `fail` names the one query that should error, `delay` slows every query.
#[derive(Default)]
pub struct FakeProvider {
    pub fail: Option<&'static str>,
    pub delay: Option<Duration>,
    pub temperature: CpuTemperature,
}

impl FakeProvider {
    pub fn failing(query: &'static str) -> Self {
        Self {
            fail: Some(query),
            ..Default::default()
        }
    }

    async fn answer<T>(&self, query: &'static str, value: T) -> Result<T, CollectError> {
        if let Some(d) = self.delay {
            tokio::time::sleep(d).await;
        }
        if self.fail == Some(query) {
            return Err(CollectError::query(query, "simulated failure"));
        }
        Ok(value)
    }
}

#[async_trait]
impl HardwareProvider for FakeProvider {
    async fn cpu(&self) -> Result<CpuInfo, CollectError> {
        self.answer(
            "cpu",
            CpuInfo {
                brand: "Ryzen 7 5800X".into(),
                manufacturer: "AMD".into(),
                cores: 16,
                physical_cores: 8,
                speed: 3.8,
            },
        )
        .await
    }

    async fn cpu_temperature(&self) -> Result<CpuTemperature, CollectError> {
        self.answer("cpu_temperature", self.temperature.clone()).await
    }

    async fn mem(&self) -> Result<MemoryReading, CollectError> {
        self.answer(
            "mem",
            MemoryReading {
                total: LOCAL_TOTAL,
                used: LOCAL_USED,
                free: LOCAL_TOTAL - LOCAL_USED,
                available: LOCAL_TOTAL - LOCAL_USED,
                swap_total: 0,
                swap_used: 0,
                swap_free: 0,
            },
        )
        .await
    }

    async fn fs_size(&self) -> Result<Vec<FsSize>, CollectError> {
        self.answer(
            "fs_size",
            vec![
                FsSize::from_space(
                    "/dev/sda1".into(),
                    "ext4".into(),
                    "/".into(),
                    1_073_741_824,
                    536_870_912,
                ),
                FsSize::from_space(
                    "/dev/sdb1".into(),
                    "xfs".into(),
                    "/data".into(),
                    3_221_225_472,
                    2_147_483_648,
                ),
            ],
        )
        .await
    }

    async fn os_info(&self) -> Result<OsInfo, CollectError> {
        self.answer(
            "os_info",
            OsInfo {
                hostname: "box".into(),
                platform: "linux".into(),
                distro: "Ubuntu".into(),
                arch: "x86_64".into(),
                kernel: "6.8.0".into(),
            },
        )
        .await
    }

    async fn current_load(&self) -> Result<CurrentLoad, CollectError> {
        self.answer(
            "current_load",
            CurrentLoad {
                current_load: 12.3456,
            },
        )
        .await
    }

    async fn network_stats(&self) -> Result<Vec<InterfaceStat>, CollectError> {
        self.answer(
            "network_stats",
            vec![
                InterfaceStat {
                    iface: "eth0".into(),
                    rx_bytes: 1536,
                    tx_bytes: 1_048_576,
                    rx_sec: 2048.0,
                    tx_sec: 0.0,
                },
                InterfaceStat {
                    iface: "lo".into(),
                    rx_bytes: 0,
                    tx_bytes: 0,
                    rx_sec: 0.0,
                    tx_sec: 0.0,
                },
            ],
        )
        .await
    }

    async fn time(&self) -> Result<TimeInfo, CollectError> {
        self.answer(
            "time",
            TimeInfo {
                current_millis: 0,
                uptime: 42.0,
                timezone: "+00:00".into(),
            },
        )
        .await
    }
}

/// A temp dir laid out like /proc with the given meminfo / uptime files (None = absent).
pub fn proc_dir(meminfo: Option<&str>, uptime: Option<&str>) -> tempfile::TempDir {
    let dir = tempfile::TempDir::new().unwrap();
    if let Some(m) = meminfo {
        std::fs::write(dir.path().join("meminfo"), m).unwrap();
    }
    if let Some(u) = uptime {
        std::fs::write(dir.path().join("uptime"), u).unwrap();
    }
    dir
}
