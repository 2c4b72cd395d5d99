//! Multi-factor scoring engine.
//!
//! A pure function from a snapshot + inflow pair to the four factor
//! scores. All inputs are non-negative and finite by construction, so
//! scoring never fails.

use crate::domain::{InflowSample, MarketSnapshot, Scores};

/// Compute flow, momentum, volume and combined scores.
#[must_use]
pub fn score(snapshot: &MarketSnapshot, inflow: &InflowSample) -> Scores {
    let flow_ratio = inflow.flow_ratio();
    let fiat_flow_score = ((flow_ratio - 1.0) * 200.0 + 100.0).clamp(0.0, 200.0);

    let price_momentum = snapshot.price_change_percent * 2.0;
    let volume_ratio = (snapshot.quote_volume / 1_000_000.0).min(10.0);
    let momentum_score = fiat_flow_score * 0.6 + price_momentum * 0.3 + volume_ratio * 0.1;

    let volume_score = (snapshot.quote_volume / 50_000_000.0 * 100.0).min(100.0);

    let combined_score = fiat_flow_score * 0.35
        + momentum_score * 0.35
        + volume_score * 0.2
        + (100.0 + price_momentum) * 0.1;

    Scores {
        fiat_flow_score,
        momentum_score,
        volume_score,
        combined_score,
    }
}
