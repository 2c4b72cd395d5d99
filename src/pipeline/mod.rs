//! The ingestion-fallback-and-scoring pipeline.
//!
//! Data flow per refresh cycle:
//!
//! ```text
//! universe -> fetcher (synth fallback) -> inflow -> scoring
//!          -> rank + classify -> detect -> ScanResult
//! ```
//!
//! [`scan`] is the sole boundary the display layer consumes. It is
//! stateless: every invocation recomputes all records from scratch, and
//! the only cross-cycle artifact is the observability counters it
//! returns.

pub mod classify;
pub mod detect;
pub mod fetcher;
pub mod inflow;
pub mod rank;
pub mod scoring;
pub mod universe;

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::info;

use crate::domain::{InflowSample, MarketSnapshot, Opportunity, ScoreRecord, Scores, Signal, Symbol};
use crate::source::MarketSource;

pub use fetcher::{FetchConfig, FetchOutcome};
pub use universe::UniverseConfig;

/// Intermediate per-symbol state between scoring and ranking.
#[derive(Debug, Clone)]
pub struct ScoredSnapshot {
    pub snapshot: MarketSnapshot,
    pub inflow: InflowSample,
    pub scores: Scores,
    pub signal: Signal,
}

/// Which score orders the returned records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Combined,
    Flow,
    Momentum,
    Volume,
    Change,
}

impl SortKey {
    fn value(self, record: &ScoreRecord) -> f64 {
        match self {
            SortKey::Combined => record.combined_score,
            SortKey::Flow => record.fiat_flow_score,
            SortKey::Momentum => record.momentum_score,
            SortKey::Volume => record.volume_score,
            SortKey::Change => record.price_change_percent,
        }
    }
}

/// Record filtering and ordering applied before records leave the core.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    pub min_momentum: f64,
    pub min_flow: f64,
    pub min_volume_score: f64,
    pub sort: SortKey,
}

impl FilterConfig {
    fn apply(&self, mut records: Vec<ScoreRecord>) -> Vec<ScoreRecord> {
        records.retain(|r| {
            r.momentum_score >= self.min_momentum
                && r.fiat_flow_score >= self.min_flow
                && r.volume_score >= self.min_volume_score
        });
        records.sort_by(|a, b| {
            self.sort
                .value(b)
                .partial_cmp(&self.sort.value(a))
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.symbol.cmp(&b.symbol))
        });
        records
    }
}

/// Authentic-vs-synthetic counters for one cycle. Observability only;
/// has no effect on scoring.
#[derive(Debug, Clone, Copy, Default)]
pub struct CycleStats {
    pub total: usize,
    pub authentic: usize,
    pub synthetic: usize,
}

/// The output of one refresh cycle.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Filtered, sorted records.
    pub records: Vec<ScoreRecord>,
    /// Detected opportunities over the full (unfiltered) record set.
    pub opportunities: Vec<Opportunity>,
    pub stats: CycleStats,
}

/// Run one full pipeline cycle over the given symbols.
///
/// Total over its input: every symbol produces exactly one record before
/// filtering, no matter which sources fail. An empty symbol set yields an
/// empty, error-free result.
pub async fn scan(
    primary: &dyn MarketSource,
    secondary: &dyn MarketSource,
    symbols: &[Symbol],
    fetch_config: &FetchConfig,
    filter: &FilterConfig,
    now: DateTime<Utc>,
) -> ScanResult {
    if symbols.is_empty() {
        return ScanResult::default();
    }

    let outcome = fetcher::fetch(primary, secondary, symbols, fetch_config).await;
    let stats = CycleStats {
        total: symbols.len(),
        authentic: outcome.authentic,
        synthetic: outcome.synthetic,
    };

    let mut scored = Vec::with_capacity(symbols.len());
    for symbol in symbols {
        // The fetch outcome is total; the guard is defensive only.
        let Some(snapshot) = outcome.snapshots.get(symbol) else {
            continue;
        };
        let inflow = inflow::estimate(symbol, snapshot, now);
        let scores = scoring::score(snapshot, &inflow);
        let signal = classify::classify(
            scores.momentum_score,
            scores.fiat_flow_score,
            snapshot.price_change_percent,
        );
        scored.push(ScoredSnapshot {
            snapshot: snapshot.clone(),
            inflow,
            scores,
            signal,
        });
    }

    let records = rank::rank(scored);
    let opportunities = detect::detect(&records);

    info!(
        symbols = stats.total,
        authentic = stats.authentic,
        synthetic = stats.synthetic,
        opportunities = opportunities.len(),
        "Cycle scored"
    );

    ScanResult {
        records: filter.apply(records),
        opportunities,
        stats,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{InflowLevel, Symbol};

    fn record(ticker: &str, flow: f64, momentum: f64, combined: f64) -> ScoreRecord {
        ScoreRecord {
            symbol: Symbol::new(ticker),
            fiat_flow_score: flow,
            momentum_score: momentum,
            volume_score: 50.0,
            combined_score: combined,
            price_change_percent: 0.0,
            quote_volume: 0.0,
            is_authentic: true,
            signal: Signal::Hold,
            inflow_level: InflowLevel::Low,
            inflow_rank: 1,
        }
    }

    #[test]
    fn filter_drops_records_below_thresholds() {
        let filter = FilterConfig {
            min_momentum: 80.0,
            min_flow: 100.0,
            ..Default::default()
        };

        let records = filter.apply(vec![
            record("BTC", 120.0, 90.0, 100.0),
            record("ETH", 90.0, 90.0, 100.0),  // flow too low
            record("ADA", 120.0, 70.0, 100.0), // momentum too low
        ]);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].symbol.as_str(), "BTC");
    }

    #[test]
    fn sort_key_orders_descending_with_symbol_tiebreak() {
        let filter = FilterConfig {
            sort: SortKey::Flow,
            ..Default::default()
        };

        let records = filter.apply(vec![
            record("XRP", 120.0, 0.0, 10.0),
            record("ADA", 120.0, 0.0, 20.0),
            record("BTC", 150.0, 0.0, 5.0),
        ]);

        let tickers: Vec<&str> = records.iter().map(|r| r.symbol.as_str()).collect();
        assert_eq!(tickers, vec!["BTC", "ADA", "XRP"]);
    }

    #[test]
    fn default_sort_is_combined_score() {
        let filter = FilterConfig::default();

        let records = filter.apply(vec![
            record("BTC", 0.0, 0.0, 50.0),
            record("ETH", 0.0, 0.0, 90.0),
        ]);

        assert_eq!(records[0].symbol.as_str(), "ETH");
    }
}
