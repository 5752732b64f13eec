// Liveness report: process uptime only, independent of the metrics collector.

use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use std::time::Instant;

static PROCESS_START: LazyLock<Instant> = LazyLock::new(Instant::now);

/// Pins the process start instant. Call once at startup; later calls are no-ops.
pub fn mark_process_start() {
    LazyLock::force(&PROCESS_START);
}

/// Seconds since [`mark_process_start`] (or since the first uptime read if never marked).
pub fn process_uptime() -> f64 {
    PROCESS_START.elapsed().as_secs_f64()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: String,
    pub uptime: f64,
}

pub fn health() -> HealthReport {
    HealthReport {
        status: "ok".into(),
        uptime: process_uptime(),
    }
}
