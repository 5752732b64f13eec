// CPU, memory and OS readings as returned by the hardware provider

use serde::{Deserialize, Serialize};

/// Static CPU identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CpuInfo {
    pub brand: String,
    pub manufacturer: String,
    pub cores: u32,
    pub physical_cores: u32,
    /// Base clock in GHz.
    pub speed: f64,
}

/// Sensor readings in °C. `main` is the package (or averaged) reading when one exists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CpuTemperature {
    pub main: Option<f32>,
    pub cores: Vec<f32>,
}

/// Global CPU load over the last sampling window, 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentLoad {
    pub current_load: f64,
}

/// Raw memory counters in bytes, as seen from wherever the provider runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryReading {
    pub total: u64,
    pub used: u64,
    pub free: u64,
    pub available: u64,
    pub swap_total: u64,
    pub swap_used: u64,
    pub swap_free: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapFacts {
    pub total: u64,
    pub used: u64,
    pub free: u64,
}

/// Resolved memory figures in bytes, with the derived usage percentage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryFacts {
    pub total: u64,
    pub used: u64,
    pub free: u64,
    pub available: u64,
    pub used_percent: f64,
    pub swap: SwapFacts,
}

impl MemoryFacts {
    pub fn new(total: u64, used: u64, free: u64, available: u64, swap: SwapFacts) -> Self {
        Self {
            total,
            used,
            free,
            available,
            used_percent: used_percent(used, total),
            swap,
        }
    }
}

impl From<MemoryReading> for MemoryFacts {
    fn from(m: MemoryReading) -> Self {
        MemoryFacts::new(
            m.total,
            m.used,
            m.free,
            m.available,
            SwapFacts {
                total: m.swap_total,
                used: m.swap_used,
                free: m.swap_free,
            },
        )
    }
}

/// `round(used / total * 10000) / 100`; a zero total reports 0.
pub fn used_percent(used: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    ((used as f64 / total as f64) * 10000.0).round() / 100.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OsInfo {
    pub hostname: String,
    pub platform: String,
    pub distro: String,
    pub arch: String,
    pub kernel: String,
}

/// Provider clock facts; `uptime` is the local (possibly container-scoped) view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeInfo {
    pub current_millis: i64,
    pub uptime: f64,
    pub timezone: String,
}
