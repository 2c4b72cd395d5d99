//! Synthetic fiat-inflow estimation.
//!
//! Inflow is a synthetic proxy metric, not derived from real transaction
//! data. Estimates are session-aware (Asia/Europe/NY multipliers), follow
//! a sinusoidal daily trend, and correlate with the snapshot's price
//! movement. All draws come from the symbol's seeded generator, so an
//! estimate is deterministic for a given symbol, hour and snapshot.

use chrono::{DateTime, Timelike, Utc};
use rand::Rng;

use crate::domain::{InflowSample, MarketSnapshot, SessionWindow, Symbol};
use crate::synth;

/// Estimate the fiat-inflow sample for one symbol.
#[must_use]
pub fn estimate(symbol: &Symbol, snapshot: &MarketSnapshot, now: DateTime<Utc>) -> InflowSample {
    let mut rng = synth::rng_for(symbol);
    let base = synth::inflow_baseline(symbol, &mut rng);

    let session = SessionWindow::at(now);
    let session_multiplier = session.multiplier();
    let trend_factor = (f64::from(now.hour()) / 24.0 * std::f64::consts::TAU).sin() * 0.3 + 1.0;

    let avg_inflow_5min = (base * session_multiplier * trend_factor).max(1.0);

    let volatility = rng.gen_range(0.6..1.4);
    // Rising price biases toward inflow, falling price away from it.
    let change = snapshot.price_change_percent;
    let correlation = if change > 2.0 {
        rng.gen_range(1.2..2.0)
    } else if change < -2.0 {
        rng.gen_range(0.5..1.2)
    } else {
        rng.gen_range(0.8..1.5)
    };

    let current_inflow =
        (base * volatility * correlation * session_multiplier * trend_factor).max(1.0);
    let transactions_per_minute = (current_inflow * rng.gen_range(0.8..1.2)).floor() as u64;

    InflowSample::new(
        current_inflow,
        avg_inflow_5min,
        transactions_per_minute,
        session_multiplier,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn snapshot(change: f64) -> MarketSnapshot {
        MarketSnapshot::synthetic(
            Symbol::new("BTC"),
            97_000.0,
            change,
            1_000.0,
            1.0e9,
            98_000.0,
            96_000.0,
            100_000,
        )
    }

    fn at_hour(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 7, hour, 30, 0).unwrap()
    }

    #[test]
    fn estimate_is_deterministic_for_same_inputs() {
        let symbol = Symbol::new("ETH");
        let snap = snapshot(1.0);
        let now = at_hour(10);

        let first = estimate(&symbol, &snap, now);
        let second = estimate(&symbol, &snap, now);

        assert_eq!(first.current_inflow, second.current_inflow);
        assert_eq!(first.avg_inflow_5min, second.avg_inflow_5min);
        assert_eq!(first.transactions_per_minute, second.transactions_per_minute);
    }

    #[test]
    fn inflow_fields_are_at_least_one() {
        // Small-cap symbol with the lowest possible multipliers.
        let symbol = Symbol::new("WAGMI");
        let sample = estimate(&symbol, &snapshot(0.0), at_hour(20));
        assert!(sample.current_inflow >= 1.0);
        assert!(sample.avg_inflow_5min >= 1.0);
    }

    #[test]
    fn session_multiplier_follows_window() {
        let symbol = Symbol::new("BTC");
        let snap = snapshot(0.0);

        assert_eq!(estimate(&symbol, &snap, at_hour(3)).session_multiplier, 0.8);
        assert_eq!(estimate(&symbol, &snap, at_hour(12)).session_multiplier, 1.2);
        assert_eq!(estimate(&symbol, &snap, at_hour(20)).session_multiplier, 1.5);
    }

    #[test]
    fn rising_price_draws_higher_inflow_than_falling() {
        // Same symbol and hour, so every other draw is identical; only the
        // correlation range differs.
        let symbol = Symbol::new("SOL");
        let now = at_hour(14);

        let rising = estimate(&symbol, &snapshot(5.0), now);
        let falling = estimate(&symbol, &snapshot(-5.0), now);

        assert!(rising.current_inflow > falling.current_inflow);
    }
}
