// The formatted snapshot document served by GET /api/metrics

use serde::{Deserialize, Serialize};

/// Placeholder for any temperature the sensors did not report.
pub const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub system: SystemSection,
    pub cpu: CpuSection,
    pub memory: MemorySection,
    pub disk: Vec<DiskEntry>,
    pub network: Vec<NetworkEntry>,
    /// ISO-8601 UTC instant with millisecond precision.
    pub timestamp: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemSection {
    pub hostname: String,
    pub platform: String,
    pub distro: String,
    pub arch: String,
    pub kernel: String,
    /// Host uptime in seconds.
    pub uptime: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CpuSection {
    pub model: String,
    pub manufacturer: String,
    pub cores: u32,
    pub physical_cores: u32,
    pub speed: String,
    pub load_percent: f64,
    pub temperature: String,
    pub cores_temp: CoreTemperatures,
}

/// Per-core readings, or the scalar `"N/A"` whenever there are none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CoreTemperatures {
    PerCore(Vec<String>),
    Unavailable(String),
}

impl CoreTemperatures {
    pub fn unavailable() -> Self {
        CoreTemperatures::Unavailable(NOT_AVAILABLE.into())
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, CoreTemperatures::Unavailable(_))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemorySection {
    pub total: String,
    pub used: String,
    pub free: String,
    pub available: String,
    pub used_percent: f64,
    pub swap: SwapSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapSection {
    pub total: String,
    pub used: String,
    pub free: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiskEntry {
    pub fs: String,
    #[serde(rename = "type")]
    pub type_: String,
    pub mount: String,
    pub size: String,
    pub used: String,
    pub available: String,
    pub used_percent: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkEntry {
    pub interface: String,
    pub rx_bytes: String,
    pub tx_bytes: String,
    pub rx_per_sec: String,
    pub tx_per_sec: String,
}
