//! Concurrent market data acquisition with graceful degradation.
//!
//! For each symbol, independently: primary source, then secondary source,
//! then the deterministic synthesizer. The output mapping is total - every
//! requested symbol has exactly one snapshot, authentic or synthetic.

use std::collections::HashMap;
use std::time::Duration;

use dashmap::DashMap;
use futures_util::StreamExt;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::domain::{MarketSnapshot, Symbol};
use crate::error::SourceError;
use crate::source::MarketSource;
use crate::synth;

/// Fetch settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Per-attempt timeout, in seconds.
    pub timeout_secs: u64,
    /// Maximum number of in-flight symbol fetches.
    pub concurrency: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 8,
            // Bounded pool: external sources rate-limit aggressively.
            concurrency: num_cpus::get().clamp(2, 8),
        }
    }
}

impl FetchConfig {
    /// The per-attempt timeout as a `Duration`.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// The result of one fetch cycle.
#[derive(Debug)]
pub struct FetchOutcome {
    /// One snapshot per requested symbol.
    pub snapshots: HashMap<Symbol, MarketSnapshot>,
    /// How many snapshots came from a live source.
    pub authentic: usize,
    /// How many snapshots were synthesized.
    pub synthetic: usize,
}

/// Fetch snapshots for every requested symbol.
///
/// Symbols are fetched concurrently under the configured bound. Failures
/// are isolated per symbol: one symbol's sources failing never affects
/// another symbol's attempt, and the terminal synthesizer fallback means
/// this function cannot fail.
pub async fn fetch(
    primary: &dyn MarketSource,
    secondary: &dyn MarketSource,
    symbols: &[Symbol],
    config: &FetchConfig,
) -> FetchOutcome {
    // Fan-in map: each symbol owns exactly one key, but completions land
    // from concurrent workers, so the container itself is synchronized.
    let results: DashMap<Symbol, MarketSnapshot> = DashMap::with_capacity(symbols.len());
    let timeout = config.timeout();

    futures_util::stream::iter(symbols.iter().cloned())
        .for_each_concurrent(config.concurrency.max(1), |symbol| {
            let results = &results;
            async move {
                let snapshot = fetch_one(primary, secondary, &symbol, timeout).await;
                results.insert(symbol, snapshot);
            }
        })
        .await;

    let mut snapshots = HashMap::with_capacity(symbols.len());
    let mut authentic = 0;
    let mut synthetic = 0;
    for (symbol, snapshot) in results {
        if snapshot.is_authentic {
            authentic += 1;
        } else {
            synthetic += 1;
        }
        snapshots.insert(symbol, snapshot);
    }

    debug!(authentic, synthetic, "Fetch cycle complete");

    FetchOutcome {
        snapshots,
        authentic,
        synthetic,
    }
}

/// One symbol's source chain: primary, secondary, synthesizer.
async fn fetch_one(
    primary: &dyn MarketSource,
    secondary: &dyn MarketSource,
    symbol: &Symbol,
    timeout: Duration,
) -> MarketSnapshot {
    match attempt(primary, symbol, timeout).await {
        Ok(snapshot) => return snapshot,
        Err(e) => debug!(
            symbol = %symbol,
            source = primary.name(),
            error = %e,
            "Primary source failed"
        ),
    }

    match attempt(secondary, symbol, timeout).await {
        Ok(snapshot) => return snapshot,
        Err(e) => warn!(
            symbol = %symbol,
            source = secondary.name(),
            error = %e,
            "All live sources failed, synthesizing"
        ),
    }

    synth::snapshot(symbol)
}

/// A single bounded source attempt. Exceeding the timeout abandons the
/// call; it is not retried within the cycle.
async fn attempt(
    source: &dyn MarketSource,
    symbol: &Symbol,
    timeout: Duration,
) -> Result<MarketSnapshot, SourceError> {
    match tokio::time::timeout(timeout, source.ticker(symbol)).await {
        Ok(result) => result,
        Err(_) => Err(SourceError::Timeout(timeout)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::source::{FailingSource, StaticSource};

    fn symbols(tickers: &[&str]) -> Vec<Symbol> {
        tickers.iter().map(|t| Symbol::new(*t)).collect()
    }

    #[tokio::test]
    async fn all_primary_successes_are_authentic() {
        let universe = symbols(&["BTC", "ETH", "ADA"]);
        let primary = StaticSource::covering(&universe);
        let secondary = FailingSource::unavailable();

        let outcome = fetch(&primary, &secondary, &universe, &FetchConfig::default()).await;

        assert_eq!(outcome.snapshots.len(), 3);
        assert_eq!(outcome.authentic, 3);
        assert_eq!(outcome.synthetic, 0);
        assert!(outcome.snapshots.values().all(|s| s.is_authentic));
    }

    #[tokio::test]
    async fn secondary_covers_primary_failures() {
        let universe = symbols(&["BTC", "ETH"]);
        let primary = FailingSource::unavailable();
        let secondary = StaticSource::covering(&universe);

        let outcome = fetch(&primary, &secondary, &universe, &FetchConfig::default()).await;

        assert_eq!(outcome.snapshots.len(), 2);
        assert_eq!(outcome.authentic, 2);
    }

    #[tokio::test]
    async fn total_failure_synthesizes_every_symbol() {
        let universe = symbols(&["BTC", "ETH", "DOGE", "WAGMI"]);
        let primary = FailingSource::unavailable();
        let secondary = FailingSource::unavailable();

        let outcome = fetch(&primary, &secondary, &universe, &FetchConfig::default()).await;

        assert_eq!(outcome.snapshots.len(), 4);
        assert_eq!(outcome.synthetic, 4);
        assert!(outcome.snapshots.values().all(|s| !s.is_authentic));
    }

    #[tokio::test]
    async fn one_symbol_failure_does_not_affect_others() {
        let universe = symbols(&["BTC", "ETH", "XRP"]);
        // Primary only knows BTC and XRP; ETH falls through to synthesis.
        let primary = StaticSource::covering(&symbols(&["BTC", "XRP"]));
        let secondary = FailingSource::unavailable();

        let outcome = fetch(&primary, &secondary, &universe, &FetchConfig::default()).await;

        assert_eq!(outcome.snapshots.len(), 3);
        assert_eq!(outcome.authentic, 2);
        assert_eq!(outcome.synthetic, 1);
        assert!(outcome.snapshots[&Symbol::new("BTC")].is_authentic);
        assert!(!outcome.snapshots[&Symbol::new("ETH")].is_authentic);
        assert!(outcome.snapshots[&Symbol::new("XRP")].is_authentic);
    }

    #[tokio::test]
    async fn empty_symbol_set_yields_empty_outcome() {
        let primary = FailingSource::unavailable();
        let secondary = FailingSource::unavailable();

        let outcome = fetch(&primary, &secondary, &[], &FetchConfig::default()).await;

        assert!(outcome.snapshots.is_empty());
        assert_eq!(outcome.authentic, 0);
        assert_eq!(outcome.synthetic, 0);
    }

    #[tokio::test]
    async fn slow_source_times_out_into_fallback() {
        let universe = symbols(&["BTC"]);
        let primary = StaticSource::covering(&universe).with_delay(Duration::from_secs(5));
        let secondary = FailingSource::unavailable();
        let config = FetchConfig {
            timeout_secs: 1,
            ..Default::default()
        };

        let start = tokio::time::Instant::now();
        let outcome = fetch(&primary, &secondary, &universe, &config).await;

        assert_eq!(outcome.synthetic, 1);
        // The attempt was abandoned at the bound, not awaited to completion.
        assert!(start.elapsed() < Duration::from_secs(4));
    }
}
