// The hardware/OS query surface consumed by the collector.

use async_trait::async_trait;

use crate::error::CollectError;
use crate::models::{
    CpuInfo, CpuTemperature, CurrentLoad, FsSize, InterfaceStat, MemoryReading, OsInfo, TimeInfo,
};

/// One independent query per method; the collector runs them all concurrently.
/// Readings are container-local when the process is containerized.
#[async_trait]
pub trait HardwareProvider: Send + Sync {
    async fn cpu(&self) -> Result<CpuInfo, CollectError>;

    async fn cpu_temperature(&self) -> Result<CpuTemperature, CollectError>;

    async fn mem(&self) -> Result<MemoryReading, CollectError>;

    /// Mounted filesystems in provider order.
    async fn fs_size(&self) -> Result<Vec<FsSize>, CollectError>;

    async fn os_info(&self) -> Result<OsInfo, CollectError>;

    async fn current_load(&self) -> Result<CurrentLoad, CollectError>;

    /// Interfaces in provider order.
    async fn network_stats(&self) -> Result<Vec<InterfaceStat>, CollectError>;

    async fn time(&self) -> Result<TimeInfo, CollectError>;
}
