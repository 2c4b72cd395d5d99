//! External data source abstractions.
//!
//! - [`SymbolCatalog`] - exchange metadata used to resolve the symbol universe
//! - [`MarketSource`] - per-symbol 24h ticker data
//!
//! Implementations live in [`binance`] (catalog + primary ticker) and
//! [`coingecko`] (secondary ticker). Test doubles live in the crate's
//! testkit.

pub mod binance;
pub mod coingecko;

use async_trait::async_trait;

use crate::domain::{MarketSnapshot, Symbol};
use crate::error::{CatalogError, SourceError};

pub use binance::{BinanceCatalog, BinanceTicker};
pub use coingecko::CoinGeckoSource;

/// One trading pair from an exchange catalog.
#[derive(Debug, Clone)]
pub struct TradingPair {
    pub base: String,
    pub quote: String,
    pub active: bool,
}

/// An exchange metadata catalog.
#[async_trait]
pub trait SymbolCatalog: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Fetch all trading pairs.
    async fn trading_pairs(&self) -> Result<Vec<TradingPair>, CatalogError>;
}

/// A per-symbol market data source.
#[async_trait]
pub trait MarketSource: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Fetch a 24h snapshot for one symbol.
    async fn ticker(&self, symbol: &Symbol) -> Result<MarketSnapshot, SourceError>;
}
