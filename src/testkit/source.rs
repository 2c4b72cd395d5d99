//! Scripted source and catalog implementations for tests.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::{MarketSnapshot, Symbol};
use crate::error::{CatalogError, SourceError};
use crate::source::{MarketSource, SymbolCatalog, TradingPair};

/// A source backed by a fixed snapshot table.
///
/// Symbols absent from the table fail with `Unavailable`, which makes it
/// easy to script per-symbol fallback scenarios. An optional delay
/// simulates a slow upstream for timeout tests.
pub struct StaticSource {
    snapshots: HashMap<Symbol, MarketSnapshot>,
    delay: Option<Duration>,
}

impl StaticSource {
    /// Build a source with one plausible authentic snapshot per symbol.
    #[must_use]
    pub fn covering(symbols: &[Symbol]) -> Self {
        let snapshots = symbols
            .iter()
            .map(|symbol| {
                let snapshot = MarketSnapshot::try_new(
                    symbol.clone(),
                    100.0,
                    1.5,
                    10_000.0,
                    1_000_000.0,
                    105.0,
                    95.0,
                    50_000,
                )
                .expect("static snapshot satisfies invariants");
                (symbol.clone(), snapshot)
            })
            .collect();
        Self {
            snapshots,
            delay: None,
        }
    }

    /// Build a source that serves exactly the given snapshots.
    #[must_use]
    pub fn with_snapshots(snapshots: Vec<MarketSnapshot>) -> Self {
        Self {
            snapshots: snapshots
                .into_iter()
                .map(|s| (s.symbol.clone(), s))
                .collect(),
            delay: None,
        }
    }

    /// Delay every response, for timeout scenarios.
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

#[async_trait]
impl MarketSource for StaticSource {
    fn name(&self) -> &'static str {
        "static"
    }

    async fn ticker(&self, symbol: &Symbol) -> Result<MarketSnapshot, SourceError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.snapshots
            .get(symbol)
            .cloned()
            .ok_or_else(|| SourceError::Unavailable(format!("no scripted snapshot for {symbol}")))
    }
}

/// A source that always fails.
pub struct FailingSource {
    parse: bool,
}

impl FailingSource {
    /// Fail every request with `Unavailable`.
    #[must_use]
    pub fn unavailable() -> Self {
        Self { parse: false }
    }

    /// Fail every request with `Parse`.
    #[must_use]
    pub fn malformed() -> Self {
        Self { parse: true }
    }
}

#[async_trait]
impl MarketSource for FailingSource {
    fn name(&self) -> &'static str {
        "failing"
    }

    async fn ticker(&self, symbol: &Symbol) -> Result<MarketSnapshot, SourceError> {
        if self.parse {
            Err(SourceError::Parse(format!("scripted parse failure for {symbol}")))
        } else {
            Err(SourceError::Unavailable(format!(
                "scripted failure for {symbol}"
            )))
        }
    }
}

/// A catalog that serves a fixed pair list or always fails.
pub struct ScriptedCatalog {
    pairs: Option<Vec<TradingPair>>,
}

impl ScriptedCatalog {
    /// Serve the given pairs.
    #[must_use]
    pub fn with_pairs(pairs: Vec<TradingPair>) -> Self {
        Self { pairs: Some(pairs) }
    }

    /// Fail every request with `Unavailable`.
    #[must_use]
    pub fn failing() -> Self {
        Self { pairs: None }
    }
}

#[async_trait]
impl SymbolCatalog for ScriptedCatalog {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn trading_pairs(&self) -> Result<Vec<TradingPair>, CatalogError> {
        self.pairs
            .clone()
            .ok_or_else(|| CatalogError::Unavailable("scripted catalog failure".into()))
    }
}
