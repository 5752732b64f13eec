use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    #[serde(default)]
    pub host: HostConfig,
    #[serde(default)]
    pub metrics: MetricsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
    /// Origins allowed by CORS; `"*"` allows any.
    pub cors_origins: Vec<String>,
    #[serde(default = "default_greeting")]
    pub greeting: String,
}

fn default_greeting() -> String {
    "I Am Alive!".into()
}

#[derive(Debug, Clone, Deserialize)]
pub struct HostConfig {
    /// Where the host's /proc is bind-mounted.
    #[serde(default = "default_proc_root")]
    pub proc_root: String,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            proc_root: default_proc_root(),
        }
    }
}

fn default_proc_root() -> String {
    crate::host_facts::DEFAULT_PROC_ROOT.into()
}

#[derive(Debug, Clone, Deserialize)]
pub struct MetricsConfig {
    /// Upper bound for one /api/metrics collection pass; 0 disables it.
    #[serde(default = "default_query_timeout_ms")]
    pub query_timeout_ms: u64,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            query_timeout_ms: default_query_timeout_ms(),
        }
    }
}

fn default_query_timeout_ms() -> u64 {
    10_000
}

impl MetricsConfig {
    pub fn query_timeout(&self) -> Option<Duration> {
        (self.query_timeout_ms > 0).then(|| Duration::from_millis(self.query_timeout_ms))
    }
}

impl AppConfig {
    /// Loads `$CONFIG_FILE` (default `config.toml`), then applies `PORT` / `CORS_ORIGINS`.
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".into());
        let s = std::fs::read_to_string(&path)
            .map_err(|e| anyhow::anyhow!("reading config {}: {}", path, e))?;
        Self::load_with_overrides(
            &s,
            std::env::var("PORT").ok().as_deref(),
            std::env::var("CORS_ORIGINS").ok().as_deref(),
        )
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        Self::load_with_overrides(s, None, None)
    }

    /// Parse, apply a port override and a comma-separated origin list override, then validate.
    pub fn load_with_overrides(
        s: &str,
        port: Option<&str>,
        cors_origins: Option<&str>,
    ) -> anyhow::Result<Self> {
        let mut config: AppConfig = toml::from_str(s)?;
        if let Some(port) = port {
            config.server.port = port
                .trim()
                .parse()
                .map_err(|e| anyhow::anyhow!("PORT must be an integer 1-65535, got {port:?}: {e}"))?;
        }
        if let Some(origins) = cors_origins {
            config.server.cors_origins = origins
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(String::from)
                .collect();
        }
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.server.port > 0,
            "server.port must be between 1 and 65535, got {}",
            self.server.port
        );
        anyhow::ensure!(!self.server.host.is_empty(), "server.host must be non-empty");
        anyhow::ensure!(
            !self.server.cors_origins.is_empty(),
            "server.cors_origins must list at least one origin (use \"*\" to allow any)"
        );
        anyhow::ensure!(
            self.server.cors_origins.iter().all(|o| !o.trim().is_empty()),
            "server.cors_origins must not contain empty entries"
        );
        if let Some(bad) = self
            .server
            .cors_origins
            .iter()
            .find(|o| axum::http::HeaderValue::from_str(o).is_err())
        {
            anyhow::bail!("server.cors_origins entry {bad:?} is not a valid header value");
        }
        anyhow::ensure!(
            !self.server.greeting.is_empty(),
            "server.greeting must be non-empty"
        );
        anyhow::ensure!(
            !self.host.proc_root.is_empty(),
            "host.proc_root must be non-empty"
        );
        Ok(())
    }
}
