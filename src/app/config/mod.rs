//! Application configuration loading and validation.
//!
//! Configuration is loaded from a TOML file; every section has defaults,
//! so an empty file (or no file at all) yields a runnable configuration.

use std::path::Path;

use serde::Deserialize;

use crate::error::{ConfigError, Result};
use crate::pipeline::{FetchConfig, FilterConfig, UniverseConfig};

mod logging;

pub use logging::LoggingConfig;

/// External source endpoints.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SourcesConfig {
    /// Binance REST base URL (catalog + primary ticker).
    pub binance_url: String,
    /// CoinGecko REST base URL (secondary ticker).
    pub coingecko_url: String,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            binance_url: "https://api.binance.com".into(),
            coingecko_url: "https://api.coingecko.com".into(),
        }
    }
}

/// Refresh cycle cadence.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RefreshConfig {
    /// Seconds between cycles.
    pub interval_secs: u64,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self { interval_secs: 60 }
    }
}

/// Main application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub universe: UniverseConfig,
    pub sources: SourcesConfig,
    pub fetch: FetchConfig,
    pub filter: FilterConfig,
    pub refresh: RefreshConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load and validate a configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;

        let config: Self = toml::from_str(&content).map_err(ConfigError::Parse)?;

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.sources.binance_url.is_empty() {
            return Err(ConfigError::MissingField {
                field: "sources.binance_url",
            }
            .into());
        }
        if self.sources.coingecko_url.is_empty() {
            return Err(ConfigError::MissingField {
                field: "sources.coingecko_url",
            }
            .into());
        }
        if self.universe.max_symbols == 0 {
            return Err(ConfigError::InvalidValue {
                field: "universe.max_symbols",
                reason: "must be at least 1".into(),
            }
            .into());
        }
        if !(1..=30).contains(&self.fetch.timeout_secs) {
            return Err(ConfigError::InvalidValue {
                field: "fetch.timeout_secs",
                reason: "must be between 1 and 30".into(),
            }
            .into());
        }
        if self.fetch.concurrency == 0 {
            return Err(ConfigError::InvalidValue {
                field: "fetch.concurrency",
                reason: "must be at least 1".into(),
            }
            .into());
        }
        if self.refresh.interval_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "refresh.interval_secs",
                reason: "must be at least 1".into(),
            }
            .into());
        }
        Ok(())
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}
