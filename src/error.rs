// Errors surfaced by a metrics collection pass

use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum CollectError {
    #[error("{query} query failed: {message}")]
    Query {
        query: &'static str,
        message: String,
    },

    #[error("sysinfo {0} lock poisoned")]
    LockPoisoned(&'static str),

    #[error("sysinfo task join: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),

    #[error("metrics collection timed out after {}ms", .0.as_millis())]
    TimedOut(Duration),
}

impl CollectError {
    pub fn query(query: &'static str, message: impl Into<String>) -> Self {
        CollectError::Query {
            query,
            message: message.into(),
        }
    }
}
