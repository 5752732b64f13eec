// Filesystem size readings

use serde::{Deserialize, Serialize};

/// One mounted filesystem. `use_percent` is `used / (used + available) * 100`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FsSize {
    pub fs: String,
    #[serde(rename = "type")]
    pub type_: String,
    pub mount: String,
    pub size: u64,
    pub used: u64,
    pub available: u64,
    pub use_percent: f64,
}

impl FsSize {
    pub fn from_space(fs: String, type_: String, mount: String, size: u64, available: u64) -> Self {
        let used = size.saturating_sub(available);
        let use_percent = if used + available > 0 {
            used as f64 / (used + available) as f64 * 100.0
        } else {
            0.0
        };
        Self {
            fs,
            type_,
            mount,
            size,
            used,
            available,
            use_percent,
        }
    }
}
