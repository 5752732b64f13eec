// Domain models: raw provider readings and the formatted snapshot

mod network;
mod snapshot;
mod storage;
mod system;

pub use network::InterfaceStat;
pub use snapshot::{
    CoreTemperatures, CpuSection, DiskEntry, MemorySection, NOT_AVAILABLE, NetworkEntry, Snapshot,
    SwapSection, SystemSection,
};
pub use storage::FsSize;
pub use system::{
    CpuInfo, CpuTemperature, CurrentLoad, MemoryFacts, MemoryReading, OsInfo, SwapFacts, TimeInfo,
    used_percent,
};
