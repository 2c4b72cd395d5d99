//! Signal classification.
//!
//! A state-free decision table over `(momentum, flow, price change)`,
//! evaluated top to bottom, first match wins.

use crate::domain::Signal;

/// Map scores to a discrete trading signal.
#[must_use]
pub fn classify(momentum_score: f64, fiat_flow_score: f64, price_change_percent: f64) -> Signal {
    if momentum_score > 120.0 && fiat_flow_score > 130.0 && price_change_percent > 2.0 {
        Signal::StrongBuy
    } else if momentum_score > 80.0 && fiat_flow_score > 110.0 {
        Signal::Buy
    } else if momentum_score < 60.0 && fiat_flow_score < 80.0 && price_change_percent < -2.0 {
        Signal::StrongSell
    } else if momentum_score < 80.0 && fiat_flow_score < 90.0 {
        Signal::Sell
    } else {
        Signal::Hold
    }
}
