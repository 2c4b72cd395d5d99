//! CoinGecko secondary ticker source.
//!
//! Used when the primary source fails for a symbol. The coin-detail
//! endpoint has no trade count, so snapshots from here report 0 trades.

use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::domain::{MarketSnapshot, Symbol};
use crate::error::{Result, SourceError};
use crate::source::MarketSource;

/// Ticker symbol to CoinGecko coin id. Covers the symbols the synthesizer
/// also knows; anything else falls through to synthesis.
const COIN_IDS: &[(&str, &str)] = &[
    ("BTC", "bitcoin"),
    ("ETH", "ethereum"),
    ("BNB", "binancecoin"),
    ("SOL", "solana"),
    ("XRP", "ripple"),
    ("ADA", "cardano"),
    ("DOGE", "dogecoin"),
    ("MATIC", "matic-network"),
    ("DOT", "polkadot"),
    ("LTC", "litecoin"),
    ("AVAX", "avalanche-2"),
    ("LINK", "chainlink"),
    ("UNI", "uniswap"),
    ("ATOM", "cosmos"),
    ("TRX", "tron"),
    ("NEAR", "near"),
];

/// Secondary market data source backed by `GET /api/v3/coins/{id}`.
pub struct CoinGeckoSource {
    client: Client,
    base_url: Url,
}

impl CoinGeckoSource {
    /// Create a client for the given base URL.
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

    fn coin_id(symbol: &Symbol) -> Option<&'static str> {
        COIN_IDS
            .iter()
            .find(|(ticker, _)| *ticker == symbol.as_str())
            .map(|(_, id)| *id)
    }
}

#[derive(Debug, Deserialize)]
struct CoinDetail {
    market_data: CoinMarketData,
}

/// CoinGecko reports prices as per-currency maps.
#[derive(Debug, Deserialize)]
struct CoinMarketData {
    current_price: HashMap<String, f64>,
    price_change_percentage_24h: Option<f64>,
    total_volume: HashMap<String, f64>,
    high_24h: HashMap<String, f64>,
    low_24h: HashMap<String, f64>,
}

fn usd(field: &'static str, map: &HashMap<String, f64>) -> std::result::Result<f64, SourceError> {
    map.get("usd")
        .copied()
        .ok_or_else(|| SourceError::Parse(format!("{field}: no usd entry")))
}

#[async_trait]
impl MarketSource for CoinGeckoSource {
    fn name(&self) -> &'static str {
        "coingecko"
    }

    async fn ticker(&self, symbol: &Symbol) -> std::result::Result<MarketSnapshot, SourceError> {
        let Some(id) = Self::coin_id(symbol) else {
            return Err(SourceError::Unavailable(format!(
                "no coin id mapping for {symbol}"
            )));
        };

        let mut url = self
            .base_url
            .join(&format!("/api/v3/coins/{id}"))
            .map_err(|e| SourceError::Unavailable(e.to_string()))?;
        url.query_pairs_mut()
            .append_pair("localization", "false")
            .append_pair("tickers", "false")
            .append_pair("community_data", "false")
            .append_pair("developer_data", "false");

        debug!(url = %url, "Fetching coin detail");

        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(SourceError::Status(response.status()));
        }

        let detail: CoinDetail = response.json().await?;
        let data = &detail.market_data;

        let price = usd("current_price", &data.current_price)?;
        let quote_volume = usd("total_volume", &data.total_volume)?;
        let volume = if price > 0.0 { quote_volume / price } else { 0.0 };

        MarketSnapshot::try_new(
            symbol.clone(),
            price,
            data.price_change_percentage_24h.unwrap_or(0.0),
            volume,
            quote_volume,
            usd("high_24h", &data.high_24h)?,
            usd("low_24h", &data.low_24h)?,
            // Trade count unavailable on this endpoint.
            0,
        )
        .map_err(|e| SourceError::Parse(e.to_string()))
    }
}
