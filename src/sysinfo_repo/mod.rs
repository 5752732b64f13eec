// HardwareProvider backed by sysinfo

mod linux;

use crate::error::CollectError;
use crate::models::*;
use crate::provider::HardwareProvider;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Instant;
use sysinfo::{Components, Disks, Networks, System};
use tracing::instrument;

/// Labels that identify a whole-package CPU sensor across common drivers.
const PACKAGE_SENSOR_LABELS: [&str; 5] = ["package id", "tctl", "tdie", "cpu_thermal", "cpu temp"];

/// Previous network totals, keyed by interface, for rate computation.
type NetworkBaseline = Option<(HashMap<String, (u64, u64)>, Instant)>;

pub struct SysinfoRepo {
    sys: Arc<Mutex<System>>,
    load_sampler: Arc<Mutex<(System, Option<Instant>)>>,
    disks: Arc<Mutex<Disks>>,
    networks: Arc<Mutex<Networks>>,
    components: Arc<Mutex<Components>>,
    last_network: Arc<Mutex<NetworkBaseline>>,
}

impl Default for SysinfoRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl SysinfoRepo {
    pub fn new() -> Self {
        let mut sys = System::new_all();
        sys.refresh_all();
        Self {
            sys: Arc::new(Mutex::new(sys)),
            load_sampler: Arc::new(Mutex::new((System::new(), None))),
            disks: Arc::new(Mutex::new(Disks::new_with_refreshed_list())),
            networks: Arc::new(Mutex::new(Networks::new_with_refreshed_list())),
            components: Arc::new(Mutex::new(Components::new_with_refreshed_list())),
            last_network: Arc::new(Mutex::new(None)),
        }
    }
}

#[async_trait]
impl HardwareProvider for SysinfoRepo {
    #[instrument(skip(self), fields(repo = "sysinfo", operation = "cpu"))]
    async fn cpu(&self) -> Result<CpuInfo, CollectError> {
        let sys = self.sys.clone();
        tokio::task::spawn_blocking(move || {
            let mut sys = sys.lock().map_err(|_| CollectError::LockPoisoned("system"))?;
            sys.refresh_cpu_all();
            let first = sys
                .cpus()
                .first()
                .ok_or_else(|| CollectError::query("cpu", "no CPUs reported"))?;

            let brand = linux::read_cpu_model_linux()
                .or_else(|| {
                    Some(first.brand().trim().to_string()).filter(|s| !s.is_empty() && s != "cpu0")
                })
                .unwrap_or_else(|| "Unknown".into());
            let manufacturer = linux::manufacturer_from_vendor(first.vendor_id());
            let speed = (first.frequency() as f64 / 10.0).round() / 100.0;
            let cores = sys.cpus().len() as u32;
            let physical_cores = System::physical_core_count().unwrap_or(cores as usize) as u32;

            Ok(CpuInfo {
                brand,
                manufacturer,
                cores,
                physical_cores,
                speed,
            })
        })
        .await?
    }

    #[instrument(skip(self), fields(repo = "sysinfo", operation = "cpu_temperature"))]
    async fn cpu_temperature(&self) -> Result<CpuTemperature, CollectError> {
        let components = self.components.clone();
        tokio::task::spawn_blocking(move || {
            let mut components = components
                .lock()
                .map_err(|_| CollectError::LockPoisoned("components"))?;
            components.refresh(false);
            let readings: Vec<(String, f32)> = components
                .list()
                .iter()
                .filter_map(|c| Some((c.label().to_lowercase(), c.temperature()?)))
                .filter(|(_, t)| t.is_finite())
                .collect();
            Ok(classify_cpu_temperatures(&readings))
        })
        .await?
    }

    #[instrument(skip(self), fields(repo = "sysinfo", operation = "mem"))]
    async fn mem(&self) -> Result<MemoryReading, CollectError> {
        let sys = self.sys.clone();
        tokio::task::spawn_blocking(move || {
            let mut sys = sys.lock().map_err(|_| CollectError::LockPoisoned("system"))?;
            sys.refresh_memory();
            let total = sys.total_memory();
            if total == 0 {
                return Err(CollectError::query("mem", "total memory reported as zero"));
            }
            Ok(MemoryReading {
                total,
                used: sys.used_memory(),
                free: sys.free_memory(),
                available: sys.available_memory(),
                swap_total: sys.total_swap(),
                swap_used: sys.used_swap(),
                swap_free: sys.free_swap(),
            })
        })
        .await?
    }

    #[instrument(skip(self), fields(repo = "sysinfo", operation = "fs_size"))]
    async fn fs_size(&self) -> Result<Vec<FsSize>, CollectError> {
        let disks = self.disks.clone();
        tokio::task::spawn_blocking(move || {
            let mut disks = disks.lock().map_err(|_| CollectError::LockPoisoned("disks"))?;
            disks.refresh(true);
            Ok(disks
                .list()
                .iter()
                .map(|d| {
                    FsSize::from_space(
                        d.name().to_string_lossy().into_owned(),
                        d.file_system().to_string_lossy().into_owned(),
                        d.mount_point().to_string_lossy().into_owned(),
                        d.total_space(),
                        d.available_space(),
                    )
                })
                .collect())
        })
        .await?
    }

    #[instrument(skip(self), fields(repo = "sysinfo", operation = "os_info"))]
    async fn os_info(&self) -> Result<OsInfo, CollectError> {
        tokio::task::spawn_blocking(|| {
            let distro = linux::read_distro_linux()
                .or_else(System::name)
                .unwrap_or_else(|| "Unknown".into());
            Ok(OsInfo {
                hostname: System::host_name().unwrap_or_default(),
                platform: std::env::consts::OS.into(),
                distro,
                arch: std::env::consts::ARCH.into(),
                kernel: System::kernel_version().unwrap_or_default(),
            })
        })
        .await?
    }

    /// Load since the previous call; the first call samples over the minimum update interval.
    #[instrument(skip(self), fields(repo = "sysinfo", operation = "current_load"))]
    async fn current_load(&self) -> Result<CurrentLoad, CollectError> {
        let sampler = self.load_sampler.clone();
        tokio::task::spawn_blocking(move || {
            let mut guard = sampler
                .lock()
                .map_err(|_| CollectError::LockPoisoned("load sampler"))?;
            let (sys, last_refresh) = &mut *guard;
            match *last_refresh {
                Some(ts) => {
                    let elapsed = ts.elapsed();
                    if elapsed < sysinfo::MINIMUM_CPU_UPDATE_INTERVAL {
                        std::thread::sleep(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL - elapsed);
                    }
                }
                None => {
                    // Baseline refresh; usage is only meaningful on the second one.
                    sys.refresh_cpu_usage();
                    std::thread::sleep(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL);
                }
            }
            sys.refresh_cpu_usage();
            *last_refresh = Some(Instant::now());
            Ok(CurrentLoad {
                current_load: (sys.global_cpu_usage() as f64).clamp(0.0, 100.0),
            })
        })
        .await?
    }

    #[instrument(skip(self), fields(repo = "sysinfo", operation = "network_stats"))]
    async fn network_stats(&self) -> Result<Vec<InterfaceStat>, CollectError> {
        let networks = self.networks.clone();
        let last_network = self.last_network.clone();
        tokio::task::spawn_blocking(move || {
            let mut networks = networks
                .lock()
                .map_err(|_| CollectError::LockPoisoned("networks"))?;
            networks.refresh(true);
            let mut interfaces: Vec<InterfaceStat> = networks
                .list()
                .iter()
                .map(|(name, data)| InterfaceStat {
                    iface: name.clone(),
                    rx_bytes: data.total_received(),
                    tx_bytes: data.total_transmitted(),
                    rx_sec: 0.0,
                    tx_sec: 0.0,
                })
                .collect();
            interfaces.sort_by(|a, b| a.iface.cmp(&b.iface));

            let now = Instant::now();
            let mut guard = last_network
                .lock()
                .map_err(|_| CollectError::LockPoisoned("network baseline"))?;
            if let Some((prev, prev_ts)) = guard.as_ref() {
                let dt_secs = now.duration_since(*prev_ts).as_secs_f64();
                if dt_secs > 0.0 {
                    for iface in &mut interfaces {
                        if let Some((prev_rx, prev_tx)) = prev.get(&iface.iface) {
                            iface.rx_sec = iface.rx_bytes.saturating_sub(*prev_rx) as f64 / dt_secs;
                            iface.tx_sec = iface.tx_bytes.saturating_sub(*prev_tx) as f64 / dt_secs;
                        }
                    }
                }
            }
            *guard = Some((
                interfaces
                    .iter()
                    .map(|i| (i.iface.clone(), (i.rx_bytes, i.tx_bytes)))
                    .collect(),
                now,
            ));

            Ok(interfaces)
        })
        .await?
    }

    #[instrument(skip(self), fields(repo = "sysinfo", operation = "time"))]
    async fn time(&self) -> Result<TimeInfo, CollectError> {
        let now = chrono::Local::now();
        Ok(TimeInfo {
            current_millis: now.timestamp_millis(),
            uptime: System::uptime() as f64,
            timezone: now.offset().to_string(),
        })
    }
}

/// Splits sensor readings (lowercased label, °C) into a package reading and per-core readings.
/// Without a package sensor, `main` is the mean of the core readings.
fn classify_cpu_temperatures(readings: &[(String, f32)]) -> CpuTemperature {
    let cores: Vec<f32> = readings
        .iter()
        .filter(|(label, _)| label.contains("core ") && !is_package_sensor(label))
        .map(|(_, t)| *t)
        .collect();
    let main = readings
        .iter()
        .find(|(label, _)| is_package_sensor(label))
        .map(|(_, t)| *t)
        .or_else(|| {
            (!cores.is_empty()).then(|| {
                let mean = cores.iter().sum::<f32>() / cores.len() as f32;
                (mean * 10.0).round() / 10.0
            })
        });
    CpuTemperature { main, cores }
}

fn is_package_sensor(label: &str) -> bool {
    PACKAGE_SENSOR_LABELS.iter().any(|p| label.contains(p))
}
