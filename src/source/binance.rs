//! Binance catalog and primary ticker source.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::domain::{MarketSnapshot, Symbol};
use crate::error::{CatalogError, Result, SourceError};
use crate::source::{MarketSource, SymbolCatalog, TradingPair};

/// Exchange metadata catalog backed by `GET /api/v3/exchangeInfo`.
pub struct BinanceCatalog {
    client: Client,
    base_url: Url,
}

impl BinanceCatalog {
    /// Create a catalog client for the given base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not a valid URL.
    pub fn new(client: Client, base_url: &str) -> Result<Self> {
        Ok(Self {
            client,
            base_url: Url::parse(base_url)?,
        })
    }
}

#[derive(Debug, Deserialize)]
struct ExchangeInfo {
    symbols: Vec<PairInfo>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PairInfo {
    base_asset: String,
    quote_asset: String,
    status: String,
}

#[async_trait]
impl SymbolCatalog for BinanceCatalog {
    fn name(&self) -> &'static str {
        "binance-catalog"
    }

    async fn trading_pairs(&self) -> std::result::Result<Vec<TradingPair>, CatalogError> {
        let url = self
            .base_url
            .join("/api/v3/exchangeInfo")
            .map_err(|e| CatalogError::Unavailable(e.to_string()))?;

        debug!(url = %url, "Fetching exchange info");

        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(CatalogError::Unavailable(format!(
                "exchangeInfo returned {}",
                response.status()
            )));
        }

        let info: ExchangeInfo = response.json().await?;
        Ok(info
            .symbols
            .into_iter()
            .map(|pair| TradingPair {
                base: pair.base_asset,
                quote: pair.quote_asset,
                active: pair.status == "TRADING",
            })
            .collect())
    }
}

/// Primary ticker source backed by `GET /api/v3/ticker/24hr`.
pub struct BinanceTicker {
    client: Client,
    base_url: Url,
    settlement_asset: String,
}

impl BinanceTicker {
    /// Create a ticker client.
    ///
    /// `settlement_asset` is appended to the ticker symbol when building
    /// the pair name (e.g. `BTC` + `USDT` -> `BTCUSDT`).
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not a valid URL.
    pub fn new(client: Client, base_url: &str, settlement_asset: &str) -> Result<Self> {
        Ok(Self {
            client,
            base_url: Url::parse(base_url)?,
            settlement_asset: settlement_asset.to_uppercase(),
        })
    }
}

/// Binance reports decimals as JSON strings.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Ticker24h {
    last_price: String,
    price_change_percent: String,
    volume: String,
    quote_volume: String,
    high_price: String,
    low_price: String,
    count: u64,
}

fn parse_decimal(field: &'static str, raw: &str) -> std::result::Result<f64, SourceError> {
    raw.parse::<f64>()
        .map_err(|_| SourceError::Parse(format!("{field}: not a number: {raw:?}")))
}

#[async_trait]
impl MarketSource for BinanceTicker {
    fn name(&self) -> &'static str {
        "binance"
    }

    async fn ticker(&self, symbol: &Symbol) -> std::result::Result<MarketSnapshot, SourceError> {
        let mut url = self
            .base_url
            .join("/api/v3/ticker/24hr")
            .map_err(|e| SourceError::Unavailable(e.to_string()))?;
        url.query_pairs_mut()
            .append_pair("symbol", &format!("{}{}", symbol, self.settlement_asset));

        debug!(url = %url, "Fetching 24h ticker");

        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(SourceError::Status(response.status()));
        }

        let ticker: Ticker24h = response.json().await?;

        MarketSnapshot::try_new(
            symbol.clone(),
            parse_decimal("lastPrice", &ticker.last_price)?,
            parse_decimal("priceChangePercent", &ticker.price_change_percent)?,
            parse_decimal("volume", &ticker.volume)?,
            parse_decimal("quoteVolume", &ticker.quote_volume)?,
            parse_decimal("highPrice", &ticker.high_price)?,
            parse_decimal("lowPrice", &ticker.low_price)?,
            ticker.count,
        )
        .map_err(|e| SourceError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_decimal_accepts_decimal_strings() {
        assert_eq!(parse_decimal("lastPrice", "97000.51").unwrap(), 97000.51);
    }

    #[test]
    fn parse_decimal_rejects_garbage() {
        assert!(matches!(
            parse_decimal("volume", "n/a"),
            Err(SourceError::Parse(_))
        ));
    }

    #[test]
    fn ticker_payload_deserializes() {
        let raw = r#"{
            "symbol": "BTCUSDT",
            "lastPrice": "97000.51",
            "priceChangePercent": "2.15",
            "volume": "12345.6",
            "quoteVolume": "1197531858.4",
            "highPrice": "98100.00",
            "lowPrice": "94800.00",
            "count": 1234567,
            "openPrice": "94958.11"
        }"#;
        let ticker: Ticker24h = serde_json::from_str(raw).unwrap();
        assert_eq!(ticker.count, 1234567);
        assert_eq!(ticker.last_price, "97000.51");
    }

    #[test]
    fn exchange_info_payload_deserializes() {
        let raw = r#"{
            "timezone": "UTC",
            "symbols": [
                {"symbol": "BTCUSDT", "baseAsset": "BTC", "quoteAsset": "USDT", "status": "TRADING"},
                {"symbol": "LUNAUSDT", "baseAsset": "LUNA", "quoteAsset": "USDT", "status": "BREAK"}
            ]
        }"#;
        let info: ExchangeInfo = serde_json::from_str(raw).unwrap();
        assert_eq!(info.symbols.len(), 2);
        assert_eq!(info.symbols[0].base_asset, "BTC");
        assert_eq!(info.symbols[1].status, "BREAK");
    }
}
