// Library for tests to access modules

pub mod collector;
pub mod config;
pub mod error;
pub mod format;
pub mod host_facts;
pub mod liveness;
pub mod models;
pub mod provider;
pub mod routes;
pub mod sysinfo_repo;
