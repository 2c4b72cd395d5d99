//! Symbol universe resolution.

use std::collections::{HashMap, HashSet};

use serde::Deserialize;
use tracing::{debug, warn};

use crate::domain::Symbol;
use crate::error::CatalogError;
use crate::source::SymbolCatalog;

/// Static fallback universe, used whenever the catalog is unavailable.
pub const FALLBACK_SYMBOLS: [&str; 10] = [
    "BTC", "ETH", "BNB", "XRP", "ADA", "SOL", "DOGE", "MATIC", "DOT", "LTC",
];

/// Universe resolution settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UniverseConfig {
    /// Maximum number of symbols to keep.
    pub max_symbols: usize,
    /// Settlement asset a base must trade against to qualify.
    pub settlement_asset: String,
}

impl Default for UniverseConfig {
    fn default() -> Self {
        Self {
            max_symbols: 10,
            settlement_asset: "USDT".into(),
        }
    }
}

/// Resolve the working symbol set.
///
/// Queries the catalog and keeps the most frequently paired base assets
/// (frequency over all active pairs, ties broken by first-seen order)
/// that trade against the settlement asset, up to `max_symbols`. Any
/// catalog failure is recovered here by returning the built-in fallback
/// list; the result is always ordered, deduplicated and non-empty.
pub async fn resolve(catalog: &dyn SymbolCatalog, config: &UniverseConfig) -> Vec<Symbol> {
    match try_resolve(catalog, config).await {
        Ok(symbols) if !symbols.is_empty() => {
            debug!(count = symbols.len(), "Universe resolved from catalog");
            symbols
        }
        Ok(_) => {
            warn!(
                catalog = catalog.name(),
                "Catalog returned no usable symbols, using fallback universe"
            );
            fallback(config.max_symbols)
        }
        Err(e) => {
            warn!(
                catalog = catalog.name(),
                error = %e,
                "Catalog unavailable, using fallback universe"
            );
            fallback(config.max_symbols)
        }
    }
}

async fn try_resolve(
    catalog: &dyn SymbolCatalog,
    config: &UniverseConfig,
) -> Result<Vec<Symbol>, CatalogError> {
    let pairs = catalog.trading_pairs().await?;

    let mut first_seen: Vec<String> = Vec::new();
    let mut pair_counts: HashMap<String, usize> = HashMap::new();
    let mut settled: HashSet<String> = HashSet::new();

    for pair in pairs.iter().filter(|p| p.active) {
        if !pair_counts.contains_key(&pair.base) {
            first_seen.push(pair.base.clone());
        }
        *pair_counts.entry(pair.base.clone()).or_insert(0) += 1;
        if pair.quote == config.settlement_asset {
            settled.insert(pair.base.clone());
        }
    }

    // Stable sort on the first-seen ordering keeps ties deterministic.
    let mut bases: Vec<String> = first_seen
        .into_iter()
        .filter(|base| settled.contains(base))
        .collect();
    bases.sort_by_key(|base| std::cmp::Reverse(pair_counts.get(base).copied().unwrap_or(0)));

    Ok(bases
        .into_iter()
        .take(config.max_symbols)
        .map(Symbol::new)
        .collect())
}

fn fallback(max_symbols: usize) -> Vec<Symbol> {
    FALLBACK_SYMBOLS
        .iter()
        .take(max_symbols.max(1))
        .map(|ticker| Symbol::new(*ticker))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::source::ScriptedCatalog;

    fn pair(base: &str, quote: &str, active: bool) -> crate::source::TradingPair {
        crate::source::TradingPair {
            base: base.into(),
            quote: quote.into(),
            active,
        }
    }

    #[tokio::test]
    async fn resolves_by_pair_frequency() {
        let catalog = ScriptedCatalog::with_pairs(vec![
            pair("ETH", "USDT", true),
            pair("ETH", "BTC", true),
            pair("ETH", "EUR", true),
            pair("BTC", "USDT", true),
            pair("BTC", "EUR", true),
            pair("ADA", "USDT", true),
        ]);

        let symbols = resolve(&catalog, &UniverseConfig::default()).await;
        let tickers: Vec<&str> = symbols.iter().map(Symbol::as_str).collect();
        assert_eq!(tickers, vec!["ETH", "BTC", "ADA"]);
    }

    #[tokio::test]
    async fn skips_bases_without_settlement_pair() {
        let catalog = ScriptedCatalog::with_pairs(vec![
            pair("BTC", "USDT", true),
            pair("ETH", "BTC", true), // never quoted in USDT
        ]);

        let symbols = resolve(&catalog, &UniverseConfig::default()).await;
        let tickers: Vec<&str> = symbols.iter().map(Symbol::as_str).collect();
        assert_eq!(tickers, vec!["BTC"]);
    }

    #[tokio::test]
    async fn skips_inactive_pairs() {
        let catalog = ScriptedCatalog::with_pairs(vec![
            pair("BTC", "USDT", true),
            pair("LUNA", "USDT", false),
        ]);

        let symbols = resolve(&catalog, &UniverseConfig::default()).await;
        let tickers: Vec<&str> = symbols.iter().map(Symbol::as_str).collect();
        assert_eq!(tickers, vec!["BTC"]);
    }

    #[tokio::test]
    async fn frequency_ties_keep_first_seen_order() {
        let catalog = ScriptedCatalog::with_pairs(vec![
            pair("DOT", "USDT", true),
            pair("ADA", "USDT", true),
            pair("XRP", "USDT", true),
        ]);

        let symbols = resolve(&catalog, &UniverseConfig::default()).await;
        let tickers: Vec<&str> = symbols.iter().map(Symbol::as_str).collect();
        assert_eq!(tickers, vec!["DOT", "ADA", "XRP"]);
    }

    #[tokio::test]
    async fn truncates_to_max_symbols() {
        let catalog = ScriptedCatalog::with_pairs(vec![
            pair("BTC", "USDT", true),
            pair("ETH", "USDT", true),
            pair("ADA", "USDT", true),
        ]);
        let config = UniverseConfig {
            max_symbols: 2,
            ..Default::default()
        };

        let symbols = resolve(&catalog, &config).await;
        assert_eq!(symbols.len(), 2);
    }

    #[tokio::test]
    async fn catalog_failure_falls_back_to_static_list() {
        let catalog = ScriptedCatalog::failing();

        let symbols = resolve(&catalog, &UniverseConfig::default()).await;
        let tickers: Vec<&str> = symbols.iter().map(Symbol::as_str).collect();
        assert_eq!(tickers, FALLBACK_SYMBOLS.to_vec());
    }

    #[tokio::test]
    async fn empty_catalog_falls_back_to_static_list() {
        let catalog = ScriptedCatalog::with_pairs(vec![]);

        let symbols = resolve(&catalog, &UniverseConfig::default()).await;
        assert!(!symbols.is_empty());
    }
}
