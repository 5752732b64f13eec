// Host-mounted /proc readers. Inside a container the local /proc describes the cgroup, so a
// bind-mounted host /proc (default /host/proc) is preferred whenever it can be read.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::models::{MemoryFacts, SwapFacts};

pub const DEFAULT_PROC_ROOT: &str = "/host/proc";

/// Outcome of a host-view read: either the host's facts or no usable host view.
#[derive(Debug, Clone, PartialEq)]
pub enum HostView<T> {
    Host(T),
    Unavailable,
}

impl<T> HostView<T> {
    pub fn is_host(&self) -> bool {
        matches!(self, HostView::Host(_))
    }

    pub fn unwrap_or_else(self, fallback: impl FnOnce() -> T) -> T {
        match self {
            HostView::Host(v) => v,
            HostView::Unavailable => fallback(),
        }
    }
}

impl<T> From<Option<T>> for HostView<T> {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => HostView::Host(v),
            None => HostView::Unavailable,
        }
    }
}

#[derive(Debug, Clone)]
pub struct HostFactsReader {
    proc_root: PathBuf,
}

impl Default for HostFactsReader {
    fn default() -> Self {
        Self::new(DEFAULT_PROC_ROOT)
    }
}

impl HostFactsReader {
    pub fn new(proc_root: impl Into<PathBuf>) -> Self {
        Self {
            proc_root: proc_root.into(),
        }
    }

    pub fn proc_root(&self) -> &Path {
        &self.proc_root
    }

    /// Reads `<proc_root>/meminfo`. Any read or parse problem yields `Unavailable`.
    pub async fn read_host_memory(&self) -> HostView<MemoryFacts> {
        let path = self.proc_root.join("meminfo");
        match tokio::fs::read_to_string(&path).await {
            Ok(content) => {
                let view = HostView::from(parse_meminfo(&content));
                if !view.is_host() {
                    debug!(path = %path.display(), "host meminfo malformed, using local view");
                }
                view
            }
            Err(e) => {
                debug!(path = %path.display(), error = %e, "host meminfo unavailable");
                HostView::Unavailable
            }
        }
    }

    /// Host uptime in seconds from `<proc_root>/uptime`; falls back to the local system uptime.
    pub async fn read_host_uptime(&self) -> f64 {
        self.host_uptime().await.unwrap_or_else(|| {
            let local = local_uptime();
            debug!(uptime = local, "host uptime unavailable, using local view");
            local
        })
    }

    pub async fn host_uptime(&self) -> HostView<f64> {
        let path = self.proc_root.join("uptime");
        match tokio::fs::read_to_string(&path).await {
            Ok(content) => parse_uptime(&content).into(),
            Err(_) => HostView::Unavailable,
        }
    }
}

/// Uptime as seen by this process (container-scoped when containerized).
pub fn local_uptime() -> f64 {
    sysinfo::System::uptime() as f64
}

/// Parses the kB fields of a meminfo document into bytes. All seven keys must be present and
/// `MemTotal` non-zero.
pub fn parse_meminfo(content: &str) -> Option<MemoryFacts> {
    let kb = |key: &str| -> Option<u64> {
        content.lines().find_map(|line| {
            let (k, rest) = line.split_once(':')?;
            if k.trim() != key || !rest.starts_with(char::is_whitespace) {
                return None;
            }
            rest.split_whitespace().next()?.parse::<u64>().ok()
        })
    };
    let bytes = |key: &str| kb(key).and_then(|v| v.checked_mul(1024));

    let total = bytes("MemTotal")?;
    let free = bytes("MemFree")?;
    let available = bytes("MemAvailable")?;
    let buffers = bytes("Buffers")?;
    let cached = bytes("Cached")?;
    let swap_total = bytes("SwapTotal")?;
    let swap_free = bytes("SwapFree")?;
    if total == 0 {
        return None;
    }

    let used = total
        .saturating_sub(free)
        .saturating_sub(buffers)
        .saturating_sub(cached);
    Some(MemoryFacts::new(
        total,
        used,
        free,
        available,
        SwapFacts {
            total: swap_total,
            used: swap_total.saturating_sub(swap_free),
            free: swap_free,
        },
    ))
}

/// First whitespace-delimited token of `/proc/uptime`, in seconds.
pub fn parse_uptime(content: &str) -> Option<f64> {
    content
        .split_whitespace()
        .next()?
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}
