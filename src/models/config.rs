//! Application configuration structures.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration, read from `parlcrawl.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Remote data service settings
    #[serde(default)]
    pub source: SourceConfig,

    /// On-disk cache settings
    #[serde(default)]
    pub cache: CacheConfig,

    /// Report settings
    #[serde(default)]
    pub report: ReportConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        url::Url::parse(&self.source.base_url)?;
        if self.source.lang.trim().is_empty() {
            return Err(AppError::validation("source.lang is empty"));
        }
        if self.source.user_agent.trim().is_empty() {
            return Err(AppError::validation("source.user_agent is empty"));
        }
        if self.source.timeout_secs == 0 {
            return Err(AppError::validation("source.timeout_secs must be > 0"));
        }
        if self.source.max_concurrent == 0 {
            return Err(AppError::validation("source.max_concurrent must be > 0"));
        }
        if self.cache.dir.as_os_str().is_empty() {
            return Err(AppError::validation("cache.dir is empty"));
        }
        if self.report.days < 0 {
            return Err(AppError::validation("report.days must be >= 0"));
        }
        Ok(())
    }
}

/// Parliament web service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Service root; requests go to `{base_url}/affairs/{id}`
    #[serde(default = "defaults::base_url")]
    pub base_url: String,

    /// Response language
    #[serde(default = "defaults::lang")]
    pub lang: String,

    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds, also the per-affair deadline
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,

    /// Maximum concurrent requests
    #[serde(default = "defaults::max_concurrent")]
    pub max_concurrent: usize,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::base_url(),
            lang: defaults::lang(),
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
            max_concurrent: defaults::max_concurrent(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Directory holding one `{id}.txt` file per cached affair
    #[serde(default = "defaults::cache_dir")]
    pub dir: PathBuf,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            dir: defaults::cache_dir(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Recency window in days
    #[serde(default = "defaults::days")]
    pub days: i64,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            days: defaults::days(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "defaults::log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::log_level(),
        }
    }
}

/// Where affair records come from during one run. Never mixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceMode {
    /// Query the web service, optionally persisting raw bodies.
    Network { write_through: bool },
    /// Read raw bodies persisted by an earlier write-through run.
    Cache,
}

impl Default for SourceMode {
    fn default() -> Self {
        Self::Network {
            write_through: false,
        }
    }
}

/// Immutable settings for one run, merged from file configuration and CLI flags.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub source: SourceConfig,
    pub mode: SourceMode,
    /// Recency window in days (inclusive)
    pub window_days: i64,
    /// Load and validate lists only
    pub dry_run: bool,
    /// Do not render done affairs
    pub ignore_done: bool,
    /// Render the latest status of every fetched affair
    pub print_status: bool,
}

impl RunConfig {
    /// Start from file configuration with every toggle off.
    pub fn from_config(config: &Config) -> Self {
        Self {
            source: config.source.clone(),
            mode: SourceMode::default(),
            window_days: config.report.days,
            dry_run: false,
            ignore_done: false,
            print_status: false,
        }
    }
}

mod defaults {
    use std::path::PathBuf;

    pub fn base_url() -> String {
        "http://ws-old.parlament.ch".into()
    }
    pub fn lang() -> String {
        "de".into()
    }
    pub fn user_agent() -> String {
        concat!("parlcrawl/", env!("CARGO_PKG_VERSION")).into()
    }
    pub fn timeout() -> u64 {
        30
    }
    pub fn max_concurrent() -> usize {
        4
    }
    pub fn cache_dir() -> PathBuf {
        PathBuf::from("cache")
    }
    pub fn days() -> i64 {
        7
    }
    pub fn log_level() -> String {
        "info".into()
    }
}
