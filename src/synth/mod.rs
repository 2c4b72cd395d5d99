//! Deterministic synthetic market data.
//!
//! When every live source for a symbol fails, the pipeline falls back to
//! data produced here. Synthesis is reproducible: all randomness for a
//! symbol is drawn from a generator seeded by a stable hash of the ticker,
//! created fresh per call. No generator state is shared across symbols or
//! calls, so concurrent synthesis of different symbols cannot interfere.

use std::collections::hash_map::DefaultHasher;
use std::hash::Hasher;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

use crate::domain::{MarketSnapshot, Symbol};

/// Reference price used when a symbol is absent from the table.
const DEFAULT_REFERENCE_PRICE: f64 = 1.0;

/// Known reference prices, used as the anchor for synthetic snapshots.
const REFERENCE_PRICES: &[(&str, f64)] = &[
    ("BTC", 97_000.0),
    ("ETH", 3_500.0),
    ("BNB", 650.0),
    ("SOL", 210.0),
    ("XRP", 2.4),
    ("ADA", 0.95),
    ("DOGE", 0.32),
    ("MATIC", 0.45),
    ("DOT", 7.0),
    ("LTC", 105.0),
    ("AVAX", 38.0),
    ("LINK", 22.0),
    ("UNI", 12.0),
    ("ATOM", 6.5),
    ("TRX", 0.24),
    ("NEAR", 5.0),
];

/// Symbols treated as large caps for the inflow baseline.
const LARGE_CAPS: &[&str] = &["BTC", "ETH", "BNB", "SOL"];

/// Symbols treated as mid caps for the inflow baseline.
const MID_CAPS: &[&str] = &["XRP", "ADA", "DOGE", "DOT", "LTC", "MATIC", "AVAX", "LINK"];

/// Derive the per-symbol seed: `hash(ticker) mod 10_000`.
///
/// `DefaultHasher::new()` uses fixed keys, so the seed is stable within
/// and across processes.
#[must_use]
pub fn seed(symbol: &Symbol) -> u64 {
    let mut hasher = DefaultHasher::new();
    hasher.write(symbol.as_str().as_bytes());
    hasher.finish() % 10_000
}

/// Build a fresh generator for a symbol.
///
/// Each call returns an identically-seeded generator, which is what makes
/// synthesis reproducible.
#[must_use]
pub fn rng_for(symbol: &Symbol) -> StdRng {
    StdRng::seed_from_u64(seed(symbol))
}

/// Look up the reference price for a symbol.
#[must_use]
pub fn reference_price(symbol: &Symbol) -> f64 {
    REFERENCE_PRICES
        .iter()
        .find(|(ticker, _)| *ticker == symbol.as_str())
        .map_or(DEFAULT_REFERENCE_PRICE, |(_, price)| *price)
}

/// Volatility tier (as a fraction of price) by reference price magnitude.
#[must_use]
pub fn volatility(reference: f64) -> f64 {
    if reference > 1_000.0 {
        0.02
    } else if reference >= 100.0 {
        0.03
    } else if reference >= 10.0 {
        0.05
    } else if reference >= 1.0 {
        0.08
    } else {
        0.15
    }
}

/// Synthesize a market snapshot for a symbol.
///
/// The price change is drawn from a normal distribution centered at zero
/// with standard deviation `volatility * 100`, truncated at three standard
/// deviations so the synthetic price always lands within
/// `reference * (1 ± 3 * volatility)`.
#[must_use]
pub fn snapshot(symbol: &Symbol) -> MarketSnapshot {
    let mut rng = rng_for(symbol);
    let reference = reference_price(symbol);
    let vol = volatility(reference);

    let sigma = vol * 100.0;
    let normal = Normal::new(0.0, sigma).expect("volatility tier is positive");
    let price_change_percent = normal.sample(&mut rng).clamp(-3.0 * sigma, 3.0 * sigma);

    let price = (reference * (1.0 + price_change_percent / 100.0)).max(0.0);
    let pad = price_change_percent.abs() / 100.0 + vol / 2.0;
    let high = price * (1.0 + pad);
    let low = (price * (1.0 - pad)).max(0.0);

    let quote_volume = reference * rng.gen_range(1.0e5..5.0e6);
    let volume = quote_volume / reference;
    let trade_count = rng.gen_range(10_000u64..250_000);

    MarketSnapshot::synthetic(
        symbol.clone(),
        price,
        price_change_percent,
        volume,
        quote_volume,
        high,
        low,
        trade_count,
    )
}

/// Draw the inflow baseline for a symbol from the provided generator.
///
/// Large caps draw uniform(200, 800), mid caps uniform(50, 300), everything
/// else uniform(10, 150). The generator is passed in so the inflow
/// estimator can continue drawing correlated values from the same stream.
#[must_use]
pub fn inflow_baseline(symbol: &Symbol, rng: &mut StdRng) -> f64 {
    if LARGE_CAPS.contains(&symbol.as_str()) {
        rng.gen_range(200.0..800.0)
    } else if MID_CAPS.contains(&symbol.as_str()) {
        rng.gen_range(50.0..300.0)
    } else {
        rng.gen_range(10.0..150.0)
    }
}
