//! Optional JSON configuration file.

use anyhow::{Context, Result};
use chrono::TimeDelta;
use directories::ProjectDirs;
use nsedash_lib::{ClientConfig, DEFAULT_TTL_SECS, DEFAULT_WINDOWS};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// User-adjustable settings. Every field has a default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct AppConfig {
    /// Chart endpoint base URL.
    pub(crate) base_url: String,
    /// Request timeout in seconds.
    pub(crate) timeout_secs: u64,
    /// User-Agent header sent with every request.
    pub(crate) user_agent: String,
    /// How long a fetched history stays fresh.
    pub(crate) cache_ttl_secs: i64,
    /// Benchmark index ticker.
    pub(crate) benchmark: String,
    /// Moving average windows for reports and exports.
    pub(crate) moving_average_windows: Vec<usize>,
    /// Stocks included in `compare` when `--count` is omitted.
    pub(crate) compare_count: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        let client = ClientConfig::default();
        Self {
            base_url: client.base_url,
            timeout_secs: client.timeout.as_secs(),
            user_agent: client.user_agent,
            cache_ttl_secs: DEFAULT_TTL_SECS,
            benchmark: "^NSEI".to_string(),
            moving_average_windows: DEFAULT_WINDOWS.to_vec(),
            compare_count: 5,
        }
    }
}

impl AppConfig {
    /// Returns the platform config file location, e.g.
    /// `~/.config/nsedash/config.json` on Linux.
    pub(crate) fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "nsedash").map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Reads and validates a config file.
    pub(crate) fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&text)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `explicit` if given, else the default file when it exists, else
    /// built-in defaults.
    pub(crate) fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        match Self::default_path() {
            Some(path) if path.is_file() => Self::from_file(&path),
            _ => {
                debug!("no config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    fn validate(&self) -> Result<()> {
        anyhow::ensure!(self.cache_ttl_secs >= 0, "cache_ttl_secs must not be negative");
        anyhow::ensure!(
            TimeDelta::try_seconds(self.cache_ttl_secs).is_some(),
            "cache_ttl_secs must be at most {}",
            TimeDelta::MAX.num_seconds()
        );
        anyhow::ensure!(self.timeout_secs > 0, "timeout_secs must be positive");
        anyhow::ensure!(!self.benchmark.trim().is_empty(), "benchmark must not be empty");
        anyhow::ensure!(
            self.moving_average_windows.iter().all(|&w| w > 0),
            "moving_average_windows must be positive"
        );
        Ok(())
    }

    /// HTTP client settings derived from this config.
    pub(crate) fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
            user_agent: self.user_agent.clone(),
            ..ClientConfig::default()
        }
    }

    /// Cache time-to-live. Saturates at `TimeDelta::MAX`.
    pub(crate) fn cache_ttl(&self) -> TimeDelta {
        TimeDelta::try_seconds(self.cache_ttl_secs).unwrap_or(TimeDelta::MAX)
    }
}
