// Network interface readings

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterfaceStat {
    pub iface: String,
    pub rx_bytes: u64,
    pub tx_bytes: u64,
    /// Receive rate in bytes/sec since the previous reading (0 on the first one).
    #[serde(default)]
    pub rx_sec: f64,
    /// Transmit rate in bytes/sec since the previous reading (0 on the first one).
    #[serde(default)]
    pub tx_sec: f64,
}
