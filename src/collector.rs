// Builds one formatted Snapshot per request: fan out every provider query plus the host
// meminfo read, join, resolve host-vs-local facts, then format.

use std::sync::Arc;
use std::time::Duration;

use chrono::{SecondsFormat, Utc};
use tracing::{debug, instrument};

use crate::error::CollectError;
use crate::format::{format_bytes, format_celsius, format_ghz, format_rate, round_percent};
use crate::host_facts::{HostFactsReader, HostView};
use crate::models::*;
use crate::provider::HardwareProvider;

pub struct MetricsCollector {
    provider: Arc<dyn HardwareProvider>,
    host: HostFactsReader,
    timeout: Option<Duration>,
}

impl MetricsCollector {
    pub fn new(provider: Arc<dyn HardwareProvider>, host: HostFactsReader) -> Self {
        Self {
            provider,
            host,
            timeout: None,
        }
    }

    /// Bounds a whole collection pass; expiry fails it with [`CollectError::TimedOut`].
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    #[instrument(skip(self), fields(operation = "collect_snapshot"))]
    pub async fn collect(&self) -> Result<Snapshot, CollectError> {
        match self.timeout {
            Some(limit) => tokio::time::timeout(limit, self.collect_unbounded())
                .await
                .map_err(|_| CollectError::TimedOut(limit))?,
            None => self.collect_unbounded().await,
        }
    }

    async fn collect_unbounded(&self) -> Result<Snapshot, CollectError> {
        let p = self.provider.as_ref();
        let (cpu, cpu_temp, mem, disks, os, load, net, time, host_mem) = tokio::try_join!(
            p.cpu(),
            p.cpu_temperature(),
            p.mem(),
            p.fs_size(),
            p.os_info(),
            p.current_load(),
            p.network_stats(),
            p.time(),
            async { Ok::<_, CollectError>(self.host.read_host_memory().await) },
        )?;

        let from_host = host_mem.is_host();
        let memory = resolve_memory(host_mem, mem);
        let uptime = self.host.read_host_uptime().await;
        debug!(
            host_memory = from_host,
            uptime,
            local_uptime = time.uptime,
            "host facts resolved"
        );

        Ok(assemble(AssembleInput {
            cpu,
            cpu_temp,
            memory,
            disks,
            os,
            load,
            net,
            uptime,
        }))
    }
}

/// The host record wins outright; otherwise the provider's counters, with the same percent rule.
pub fn resolve_memory(host: HostView<MemoryFacts>, local: MemoryReading) -> MemoryFacts {
    host.unwrap_or_else(|| MemoryFacts::from(local))
}

/// Joined, resolved readings ready for formatting.
pub struct AssembleInput {
    pub cpu: CpuInfo,
    pub cpu_temp: CpuTemperature,
    pub memory: MemoryFacts,
    pub disks: Vec<FsSize>,
    pub os: OsInfo,
    pub load: CurrentLoad,
    pub net: Vec<InterfaceStat>,
    pub uptime: f64,
}

pub fn assemble(input: AssembleInput) -> Snapshot {
    let AssembleInput {
        cpu,
        cpu_temp,
        memory,
        disks,
        os,
        load,
        net,
        uptime,
    } = input;

    let temperature = cpu_temp
        .main
        .map(format_celsius)
        .unwrap_or_else(|| NOT_AVAILABLE.into());
    let cores_temp = if cpu_temp.cores.is_empty() {
        CoreTemperatures::unavailable()
    } else {
        CoreTemperatures::PerCore(cpu_temp.cores.into_iter().map(format_celsius).collect())
    };

    Snapshot {
        system: SystemSection {
            hostname: os.hostname,
            platform: os.platform,
            distro: os.distro,
            arch: os.arch,
            kernel: os.kernel,
            uptime,
        },
        cpu: CpuSection {
            model: cpu.brand,
            manufacturer: cpu.manufacturer,
            cores: cpu.cores,
            physical_cores: cpu.physical_cores,
            speed: format_ghz(cpu.speed),
            load_percent: round_percent(load.current_load),
            temperature,
            cores_temp,
        },
        memory: MemorySection {
            total: format_bytes(memory.total),
            used: format_bytes(memory.used),
            free: format_bytes(memory.free),
            available: format_bytes(memory.available),
            used_percent: memory.used_percent,
            swap: SwapSection {
                total: format_bytes(memory.swap.total),
                used: format_bytes(memory.swap.used),
                free: format_bytes(memory.swap.free),
            },
        },
        disk: disks
            .into_iter()
            .map(|d| DiskEntry {
                fs: d.fs,
                type_: d.type_,
                mount: d.mount,
                size: format_bytes(d.size),
                used: format_bytes(d.used),
                available: format_bytes(d.available),
                used_percent: round_percent(d.use_percent),
            })
            .collect(),
        network: net
            .into_iter()
            .map(|n| NetworkEntry {
                interface: n.iface,
                rx_bytes: format_bytes(n.rx_bytes),
                tx_bytes: format_bytes(n.tx_bytes),
                rx_per_sec: format_rate(n.rx_sec),
                tx_per_sec: format_rate(n.tx_sec),
            })
            .collect(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    }
}
