//! Point-in-time market data for a single symbol.

use serde::Serialize;

use super::error::DomainError;
use super::symbol::Symbol;

/// A 24-hour market data snapshot.
///
/// `is_authentic` distinguishes live-sourced data from synthetic
/// stand-ins. Authentic snapshots are validated at construction;
/// synthetic ones satisfy the same bounds by construction.
#[derive(Debug, Clone, Serialize)]
pub struct MarketSnapshot {
    pub symbol: Symbol,
    /// Last traded price.
    pub price: f64,
    /// 24h price change, in percent.
    pub price_change_percent: f64,
    /// 24h base-asset volume.
    pub volume: f64,
    /// 24h quote-asset volume.
    pub quote_volume: f64,
    /// 24h high.
    pub high: f64,
    /// 24h low.
    pub low: f64,
    /// 24h trade count (0 when the source does not report it).
    pub trade_count: u64,
    /// Whether this snapshot came from a live source.
    pub is_authentic: bool,
}

impl MarketSnapshot {
    /// Create an authentic snapshot, validating domain invariants.
    ///
    /// # Errors
    ///
    /// Returns `DomainError` if `high >= price >= low >= 0` does not hold,
    /// a volume field is negative, or any numeric field is non-finite.
    #[allow(clippy::too_many_arguments)]
    pub fn try_new(
        symbol: Symbol,
        price: f64,
        price_change_percent: f64,
        volume: f64,
        quote_volume: f64,
        high: f64,
        low: f64,
        trade_count: u64,
    ) -> Result<Self, DomainError> {
        for (field, value) in [
            ("price", price),
            ("price_change_percent", price_change_percent),
            ("volume", volume),
            ("quote_volume", quote_volume),
            ("high", high),
            ("low", low),
        ] {
            if !value.is_finite() {
                return Err(DomainError::NonFinite { field });
            }
        }

        if !(high >= price && price >= low && low >= 0.0) {
            return Err(DomainError::PriceBounds { high, price, low });
        }
        if volume < 0.0 {
            return Err(DomainError::NegativeVolume {
                field: "volume",
                value: volume,
            });
        }
        if quote_volume < 0.0 {
            return Err(DomainError::NegativeVolume {
                field: "quote_volume",
                value: quote_volume,
            });
        }

        Ok(Self {
            symbol,
            price,
            price_change_percent,
            volume,
            quote_volume,
            high,
            low,
            trade_count,
            is_authentic: true,
        })
    }

    /// Create a synthetic snapshot.
    ///
    /// Bounds are enforced by clamping rather than validation: the
    /// synthesizer produces values that already satisfy the invariant, and
    /// clamping keeps that true for any inputs.
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn synthetic(
        symbol: Symbol,
        price: f64,
        price_change_percent: f64,
        volume: f64,
        quote_volume: f64,
        high: f64,
        low: f64,
        trade_count: u64,
    ) -> Self {
        let price = price.max(0.0);
        let low = low.clamp(0.0, price);
        let high = high.max(price);
        Self {
            symbol,
            price,
            price_change_percent,
            volume: volume.max(0.0),
            quote_volume: quote_volume.max(0.0),
            high,
            low,
            trade_count,
            is_authentic: false,
        }
    }
}
